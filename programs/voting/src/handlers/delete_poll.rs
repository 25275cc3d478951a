use anchor_lang::prelude::*;

use crate::{
    constants::POLL_SEED,
    error::ErrorCode,
    ledger,
    state::{Poll, PollDeleted},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct DeletePoll<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, decoded by the handler so a missing poll reports InvalidPoll
    pub poll: UncheckedAccount<'info>,
}

/// Closes a poll once all of its candidates have been deleted.
///
/// Vote records for the poll are not touched.
pub fn delete_poll(ctx: Context<DeletePoll>, poll_id: u64) -> Result<()> {
    ctx.accounts.delete_poll(poll_id)
}

impl<'info> DeletePoll<'info> {
    pub fn delete_poll(&mut self, poll_id: u64) -> Result<()> {
        msg!("Deleting poll {}", poll_id);

        let poll = ledger::load::<Poll>(&self.poll)?.ok_or(ErrorCode::InvalidPoll)?;
        poll.require_authority(&self.signer.key())?;
        poll.require_no_candidates()?;

        ledger::close(&self.poll, &self.signer)?;

        emit!(PollDeleted { poll_id });

        Ok(())
    }
}
