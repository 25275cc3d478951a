// Seeds for program derived addresses. Numeric keys follow as little-endian u64.
pub const POLL_SEED: &[u8] = b"poll";
pub const CANDIDATE_SEED: &[u8] = b"candidate";
pub const VOTE_SEED: &[u8] = b"vote";

// String limits, in bytes. These also size the accounts through #[max_len].
pub const MAX_QUESTION_LEN: usize = 200;
pub const MAX_CANDIDATE_NAME_LEN: usize = 100;
