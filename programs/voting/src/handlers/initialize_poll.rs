use anchor_lang::prelude::*;

use crate::{
    constants::POLL_SEED,
    ledger,
    state::{Poll, PollInitialized},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // `init` fails if a poll already lives at this id
    #[account(
        init,
        payer = signer,
        space = Poll::DISCRIMINATOR.len() + Poll::INIT_SPACE,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

/// Creates a poll owned by the signer.
///
/// Voting is accepted from `poll_start` through `poll_end` inclusive. The schedule must
/// be non-empty and must not already be over.
///
/// # Arguments
/// * `poll_id` - Unique identifier for this poll, used to derive its address
/// * `question` - The question voters will respond to (max 200 bytes)
/// * `poll_start` - Unix timestamp at which voting opens
/// * `poll_end` - Unix timestamp after which voting is closed
pub fn initialize_poll(
    ctx: Context<InitializePoll>,
    poll_id: u64,
    question: String,
    poll_start: u64,
    poll_end: u64,
) -> Result<()> {
    let now = ledger::now()?;
    ctx.accounts
        .initialize_poll(poll_id, question, poll_start, poll_end, ctx.bumps.poll, now)
}

impl<'info> InitializePoll<'info> {
    pub fn initialize_poll(
        &mut self,
        poll_id: u64,
        question: String,
        poll_start: u64,
        poll_end: u64,
        bump: u8,
        now: u64,
    ) -> Result<()> {
        msg!("Initializing poll {}", poll_id);

        Poll::validate_question(&question)?;
        Poll::validate_schedule(poll_start, poll_end, now)?;

        let authority = self.signer.key();
        self.poll.set_inner(Poll {
            bump,
            poll_id,
            question,
            poll_start,
            poll_end,
            authority,
            total_candidates: 0,
        });

        emit!(PollInitialized {
            poll_id,
            authority,
            poll_start,
            poll_end,
        });

        Ok(())
    }
}
