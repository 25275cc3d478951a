use anchor_lang::prelude::*;

use crate::{
    constants::{CANDIDATE_SEED, POLL_SEED},
    error::ErrorCode,
    ledger,
    state::{Candidate, CandidateDeleted, Poll},
};

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_id: u64)]
pub struct DeleteCandidate<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, decoded by the handler so a missing poll reports InvalidPoll
    pub poll: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            CANDIDATE_SEED,
            poll_id.to_le_bytes().as_ref(),
            candidate_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    /// CHECK: candidate, decoded by the handler so a missing candidate reports CandidateNotFound
    pub candidate: UncheckedAccount<'info>,
}

/// Removes a candidate from a poll and returns its rent to the signer.
///
/// Only the poll authority may delete candidates. Votes already cast for the
/// candidate are left in place.
pub fn delete_candidate(
    ctx: Context<DeleteCandidate>,
    poll_id: u64,
    candidate_id: u64,
) -> Result<()> {
    ctx.accounts.delete_candidate(poll_id, candidate_id)
}

impl<'info> DeleteCandidate<'info> {
    pub fn delete_candidate(&mut self, poll_id: u64, candidate_id: u64) -> Result<()> {
        msg!("Deleting candidate {} from poll {}", candidate_id, poll_id);

        ledger::load::<Candidate>(&self.candidate)?
            .filter(|candidate| candidate.belongs_to(poll_id))
            .ok_or(ErrorCode::CandidateNotFound)?;

        let mut poll = ledger::load::<Poll>(&self.poll)?.ok_or(ErrorCode::InvalidPoll)?;
        poll.require_authority(&self.signer.key())?;

        poll.candidate_removed()?;
        ledger::store(&self.poll, &poll)?;
        ledger::close(&self.candidate, &self.signer)?;

        emit!(CandidateDeleted {
            poll_id,
            candidate_id,
        });

        Ok(())
    }
}
