use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::VOTE_SEED;

/// Proof that a voter has cast their single ballot in a poll.
///
/// Records are written once and never modified or closed. Tallies are not kept
/// on-chain; clients enumerate records and aggregate them with [`tally`].
#[account]
#[derive(InitSpace)]
pub struct VoteRecord {
    /// PDA bump seed
    pub bump: u8,
    pub has_voted: bool,
    pub candidate_id: u64,
    pub poll_id: u64,
}

impl VoteRecord {
    /// Address of a voter's record: `["vote", poll_id, voter]`.
    pub fn address(poll_id: u64, voter: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[VOTE_SEED, poll_id.to_le_bytes().as_ref(), voter.as_ref()],
            &crate::ID,
        )
    }
}

/// Counts votes per candidate id for one poll.
///
/// A client-side helper: the program never calls it. Readers fetch every
/// `VoteRecord` account of the program, decode them and pass them in. Records
/// from other polls, or records that were allocated but never marked as voted,
/// are skipped.
pub fn tally<'a, I>(poll_id: u64, records: I) -> BTreeMap<u64, u64>
where
    I: IntoIterator<Item = &'a VoteRecord>,
{
    let mut counts = BTreeMap::new();
    for record in records
        .into_iter()
        .filter(|record| record.has_voted && record.poll_id == poll_id)
    {
        *counts.entry(record.candidate_id).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(poll_id: u64, candidate_id: u64) -> VoteRecord {
        VoteRecord {
            bump: 255,
            has_voted: true,
            candidate_id,
            poll_id,
        }
    }

    #[test]
    fn each_voter_gets_a_distinct_record_per_poll() {
        let alice = Pubkey::new_from_array([1; 32]);
        let bob = Pubkey::new_from_array([2; 32]);

        assert_eq!(VoteRecord::address(1, &alice), VoteRecord::address(1, &alice));
        assert_ne!(VoteRecord::address(1, &alice).0, VoteRecord::address(1, &bob).0);
        assert_ne!(VoteRecord::address(1, &alice).0, VoteRecord::address(2, &alice).0);
    }

    #[test]
    fn tally_counts_only_the_requested_poll() {
        let mut unset = record(1, 3);
        unset.has_voted = false;
        let records = vec![
            record(1, 1),
            record(1, 2),
            record(1, 1),
            record(2, 1),
            unset,
        ];

        let counts = tally(1, &records);
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.get(&3), None);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn tally_of_no_records_is_empty() {
        assert!(tally(1, &Vec::<VoteRecord>::new()).is_empty());
    }
}
