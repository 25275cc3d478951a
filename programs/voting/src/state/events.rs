use anchor_lang::prelude::*;

#[event]
pub struct PollInitialized {
    pub poll_id: u64,
    pub authority: Pubkey,
    pub poll_start: u64,
    pub poll_end: u64,
}

#[event]
pub struct PollDeleted {
    pub poll_id: u64,
}

#[event]
pub struct CandidateAdded {
    pub poll_id: u64,
    pub candidate_id: u64,
}

#[event]
pub struct CandidateDeleted {
    pub poll_id: u64,
    pub candidate_id: u64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub candidate_id: u64,
    pub voter: Pubkey,
    /// Ledger time the vote was recorded at
    pub timestamp: u64,
}
