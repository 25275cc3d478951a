use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Poll start time must be before the end time.")]
    InvalidPollTime,
    #[msg("Poll end time cannot be in the past.")]
    InvalidPollEnd,
    #[msg("You have already voted in this poll.")]
    AlreadyVoted,
    #[msg("Voting for this poll is closed.")]
    VotingClosed,
    #[msg("Selected candidate does not belong to this poll.")]
    InvalidCandidate,
    #[msg("Invalid poll reference.")]
    InvalidPoll,
    #[msg("Only the poll creator can modify this poll")]
    Unauthorized,
    #[msg("Candidates still exist for this poll. Remove them before deleting the poll.")]
    CandidatesExist,
    #[msg("Candidate not found.")]
    CandidateNotFound,
    #[msg("Poll question is too long.")]
    QuestionTooLong,
    #[msg("Candidate name is too long.")]
    NameTooLong,
    #[msg("Candidate counter out of range.")]
    CounterOverflow,
}
