use anchor_lang::prelude::*;

use crate::{
    constants::{CANDIDATE_SEED, POLL_SEED, VOTE_SEED},
    error::ErrorCode,
    ledger,
    state::{Candidate, Poll, VoteCast, VoteRecord},
};

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_id: u64)]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, decoded by the handler so a missing poll reports InvalidPoll
    pub poll: UncheckedAccount<'info>,

    #[account(
        seeds = [
            CANDIDATE_SEED,
            poll_id.to_le_bytes().as_ref(),
            candidate_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    /// CHECK: candidate, decoded by the handler so a missing candidate reports InvalidCandidate
    pub candidate: UncheckedAccount<'info>,

    // One record per (poll, voter). A second vote from the same key lands on the
    // same account, which the handler sees as already voted.
    #[account(
        init_if_needed,
        payer = voter,
        space = VoteRecord::DISCRIMINATOR.len() + VoteRecord::INIT_SPACE,
        seeds = [VOTE_SEED, poll_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub vote_record: Account<'info, VoteRecord>,

    pub system_program: Program<'info, System>,
}

/// Casts the signer's single vote in a poll.
///
/// Checks run in a fixed order and the first failure is reported: the poll must
/// exist, the ledger clock must be inside the voting window, the candidate must
/// belong to the poll, and the signer must not have voted in this poll before.
///
/// No tally is updated here. Each vote is its own account so that voters never
/// contend for a shared counter; results come from enumerating vote records.
pub fn vote(ctx: Context<Vote>, poll_id: u64, candidate_id: u64) -> Result<()> {
    let now = ledger::now()?;
    ctx.accounts
        .vote(poll_id, candidate_id, ctx.bumps.vote_record, now)
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self, poll_id: u64, candidate_id: u64, bump: u8, now: u64) -> Result<()> {
        msg!("Voting in poll {} for candidate {}", poll_id, candidate_id);

        let poll = ledger::load::<Poll>(&self.poll)?.ok_or(ErrorCode::InvalidPoll)?;
        poll.require_open(now)?;

        ledger::load::<Candidate>(&self.candidate)?
            .filter(|candidate| candidate.belongs_to(poll_id))
            .ok_or(ErrorCode::InvalidCandidate)?;

        require!(!self.vote_record.has_voted, ErrorCode::AlreadyVoted);

        self.vote_record.set_inner(VoteRecord {
            bump,
            has_voted: true,
            candidate_id,
            poll_id,
        });

        emit!(VoteCast {
            poll_id,
            candidate_id,
            voter: self.voter.key(),
            timestamp: now,
        });

        Ok(())
    }
}
