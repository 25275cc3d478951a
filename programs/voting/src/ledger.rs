//! Raw account access for records whose absence must surface as a named error.
//!
//! Anchor's typed `Account` fails with a generic "not initialized" error when nothing
//! lives at an address. Handlers that need `InvalidPoll` or `CandidateNotFound`
//! instead take the derived address as an `UncheckedAccount` and go through here.
//! `Account::try_from` cannot be used on such a field: it needs the account info
//! borrowed for the whole instruction (`&'info AccountInfo<'info>`), while a field
//! of `ctx.accounts` can only be borrowed for the handler call.

use anchor_lang::prelude::*;
use anchor_lang::{system_program, AccountDeserialize, AccountSerialize, Lamports, Owner};

/// Decodes the record at `info`, or returns `None` if the address holds no
/// account owned by this program.
pub fn load<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Writes `value` back over the account's existing allocation.
pub fn store<T>(info: &AccountInfo, value: &T) -> Result<()>
where
    T: AccountSerialize,
{
    let mut data = info.try_borrow_mut_data()?;
    value.try_serialize(&mut &mut data[..])
}

/// Deallocates `info`, crediting its lamports to `destination`.
///
/// The data is zeroed and ownership handed back to the system program. The runtime
/// purges the emptied account once the transaction completes.
pub fn close<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let reclaimed = info.get_lamports();
    info.sub_lamports(reclaimed)?;
    destination.add_lamports(reclaimed)?;

    info.try_borrow_mut_data()?.fill(0);
    info.assign(&system_program::ID);
    Ok(())
}

/// Current ledger time in unix seconds.
pub fn now() -> Result<u64> {
    let clock = Clock::get()?;
    Ok(u64::try_from(clock.unix_timestamp).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Poll;

    fn poll() -> Poll {
        Poll {
            bump: 253,
            poll_id: 1,
            question: "Who should be the next president?".to_string(),
            poll_start: 100,
            poll_end: 200,
            authority: Pubkey::new_from_array([9; 32]),
            total_candidates: 0,
        }
    }

    #[test]
    fn empty_address_loads_as_none() {
        let key = Poll::address(1).0;
        let owner = system_program::ID;
        let mut lamports = 0;
        let mut data = vec![];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(load::<Poll>(&info).unwrap().is_none());
    }

    #[test]
    fn foreign_owned_account_loads_as_none() {
        let key = Poll::address(1).0;
        let owner = Pubkey::new_from_array([3; 32]);
        let mut lamports = 1_000_000;
        let mut data = vec![1; 8 + Poll::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(load::<Poll>(&info).unwrap().is_none());
    }

    #[test]
    fn stored_changes_are_visible_to_the_next_load() {
        let key = Poll::address(1).0;
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = vec![0; Poll::DISCRIMINATOR.len() + Poll::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let mut poll = poll();
        store(&info, &poll).unwrap();
        poll.candidate_added().unwrap();
        store(&info, &poll).unwrap();

        let loaded = load::<Poll>(&info).unwrap().unwrap();
        assert_eq!(loaded.total_candidates, 1);
        assert_eq!(loaded.question, poll.question);
        assert_eq!(loaded.authority, poll.authority);
    }
}
