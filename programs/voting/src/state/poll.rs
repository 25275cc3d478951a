use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_QUESTION_LEN, POLL_SEED},
    error::ErrorCode,
};

/// A poll question together with the window in which votes are accepted.
#[account]
#[derive(InitSpace)]
pub struct Poll {
    /// PDA bump seed
    pub bump: u8,
    /// Unique identifier for this poll, also its address key
    pub poll_id: u64,
    /// The poll question (max 200 bytes)
    #[max_len(MAX_QUESTION_LEN)]
    pub question: String,
    /// First second (unix time) at which votes are accepted
    pub poll_start: u64,
    /// Last second (unix time) at which votes are accepted
    pub poll_end: u64,
    /// Public key of the poll creator (only they can manage candidates or delete the poll)
    pub authority: Pubkey,
    /// Number of candidate accounts currently allocated for this poll
    pub total_candidates: u64,
}

impl Poll {
    /// Address of the poll with the given id: `["poll", poll_id]`.
    pub fn address(poll_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[POLL_SEED, poll_id.to_le_bytes().as_ref()], &crate::ID)
    }

    pub fn validate_question(question: &str) -> Result<()> {
        require!(
            question.len() <= MAX_QUESTION_LEN,
            ErrorCode::QuestionTooLong
        );
        Ok(())
    }

    /// Checks a schedule at creation time. The end may equal `now` but not precede it.
    pub fn validate_schedule(poll_start: u64, poll_end: u64, now: u64) -> Result<()> {
        require!(poll_start < poll_end, ErrorCode::InvalidPollTime);
        require!(poll_end >= now, ErrorCode::InvalidPollEnd);
        Ok(())
    }

    /// Both ends of the window are inclusive.
    pub fn is_open(&self, now: u64) -> bool {
        (self.poll_start..=self.poll_end).contains(&now)
    }

    pub fn require_open(&self, now: u64) -> Result<()> {
        require!(self.is_open(now), ErrorCode::VotingClosed);
        Ok(())
    }

    pub fn require_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.authority, ErrorCode::Unauthorized);
        Ok(())
    }

    pub fn require_no_candidates(&self) -> Result<()> {
        require!(self.total_candidates == 0, ErrorCode::CandidatesExist);
        Ok(())
    }

    pub fn candidate_added(&mut self) -> Result<()> {
        self.total_candidates = self
            .total_candidates
            .checked_add(1)
            .ok_or(ErrorCode::CounterOverflow)?;
        Ok(())
    }

    pub fn candidate_removed(&mut self) -> Result<()> {
        self.total_candidates = self
            .total_candidates
            .checked_sub(1)
            .ok_or(ErrorCode::CounterOverflow)?;
        Ok(())
    }
}
