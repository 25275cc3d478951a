use anchor_lang::prelude::*;

use crate::{
    constants::{CANDIDATE_SEED, POLL_SEED},
    error::ErrorCode,
    ledger,
    state::{Candidate, CandidateAdded, Poll},
};

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_id: u64)]
pub struct AddCandidate<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, decoded by the handler so a missing poll reports InvalidPoll
    pub poll: UncheckedAccount<'info>,

    // A repeated candidate_id hits an occupied address and `init` rejects it
    #[account(
        init,
        payer = signer,
        space = Candidate::DISCRIMINATOR.len() + Candidate::INIT_SPACE,
        seeds = [
            CANDIDATE_SEED,
            poll_id.to_le_bytes().as_ref(),
            candidate_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

/// Adds a candidate to an existing poll. Only the poll authority may do this.
///
/// # Arguments
/// * `poll_id` - The poll the candidate is added to
/// * `candidate_id` - Identifier of the candidate, unique within the poll
/// * `candidate_name` - Display name (max 100 bytes)
pub fn add_candidate(
    ctx: Context<AddCandidate>,
    poll_id: u64,
    candidate_id: u64,
    candidate_name: String,
) -> Result<()> {
    ctx.accounts
        .add_candidate(poll_id, candidate_id, candidate_name, ctx.bumps.candidate)
}

impl<'info> AddCandidate<'info> {
    pub fn add_candidate(
        &mut self,
        poll_id: u64,
        candidate_id: u64,
        candidate_name: String,
        bump: u8,
    ) -> Result<()> {
        msg!("Adding candidate {} to poll {}", candidate_id, poll_id);

        let mut poll = ledger::load::<Poll>(&self.poll)?.ok_or(ErrorCode::InvalidPoll)?;
        poll.require_authority(&self.signer.key())?;
        Candidate::validate_name(&candidate_name)?;

        poll.candidate_added()?;
        ledger::store(&self.poll, &poll)?;

        self.candidate.set_inner(Candidate {
            bump,
            candidate_id,
            poll_id,
            name: candidate_name,
        });

        emit!(CandidateAdded {
            poll_id,
            candidate_id,
        });

        Ok(())
    }
}
