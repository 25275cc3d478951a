// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]
#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod state;

pub use error::ErrorCode;
pub use handlers::*;
pub use state::*;

declare_id!("CCqSC4D4fJDj9KeKgibvyW2xd1FYuSEi8i7hjHovgDkK");

#[program]
pub mod voting {
    use super::*;

    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        question: String,
        poll_start: u64,
        poll_end: u64,
    ) -> Result<()> {
        handlers::initialize_poll::initialize_poll(ctx, poll_id, question, poll_start, poll_end)
    }

    pub fn add_candidate(
        ctx: Context<AddCandidate>,
        poll_id: u64,
        candidate_id: u64,
        candidate_name: String,
    ) -> Result<()> {
        handlers::add_candidate::add_candidate(ctx, poll_id, candidate_id, candidate_name)
    }

    pub fn vote(ctx: Context<Vote>, poll_id: u64, candidate_id: u64) -> Result<()> {
        handlers::vote::vote(ctx, poll_id, candidate_id)
    }

    pub fn delete_candidate(
        ctx: Context<DeleteCandidate>,
        poll_id: u64,
        candidate_id: u64,
    ) -> Result<()> {
        handlers::delete_candidate::delete_candidate(ctx, poll_id, candidate_id)
    }

    pub fn delete_poll(ctx: Context<DeletePoll>, poll_id: u64) -> Result<()> {
        handlers::delete_poll::delete_poll(ctx, poll_id)
    }
}
