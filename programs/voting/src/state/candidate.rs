use anchor_lang::prelude::*;

use crate::{
    constants::{CANDIDATE_SEED, MAX_CANDIDATE_NAME_LEN},
    error::ErrorCode,
};

/// One option on a poll's ballot.
#[account]
#[derive(InitSpace)]
pub struct Candidate {
    /// PDA bump seed
    pub bump: u8,
    pub candidate_id: u64,
    /// Poll this candidate was added to
    pub poll_id: u64,
    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub name: String,
}

impl Candidate {
    /// Address of a candidate: `["candidate", poll_id, candidate_id]`.
    pub fn address(poll_id: u64, candidate_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                CANDIDATE_SEED,
                poll_id.to_le_bytes().as_ref(),
                candidate_id.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    pub fn validate_name(name: &str) -> Result<()> {
        require!(name.len() <= MAX_CANDIDATE_NAME_LEN, ErrorCode::NameTooLong);
        Ok(())
    }

    pub fn belongs_to(&self, poll_id: u64) -> bool {
        self.poll_id == poll_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Poll;
    use anchor_lang::error::Error;

    #[test]
    fn name_length_is_bounded() {
        assert!(Candidate::validate_name("Alice Smith").is_ok());
        let err = Candidate::validate_name(&"n".repeat(MAX_CANDIDATE_NAME_LEN + 1)).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::NameTooLong));
    }

    #[test]
    fn candidate_ids_are_scoped_to_their_poll() {
        let (same, _) = Candidate::address(1, 1);
        assert_eq!(same, Candidate::address(1, 1).0);
        assert_ne!(same, Candidate::address(2, 1).0);
        assert_ne!(same, Candidate::address(1, 2).0);
        // the tag keeps candidates and polls in separate namespaces
        assert_ne!(same, Poll::address(1).0);
    }

    #[test]
    fn back_reference_is_checked() {
        let candidate = Candidate {
            bump: 254,
            candidate_id: 1,
            poll_id: 7,
            name: "John Doe".to_string(),
        };
        assert!(candidate.belongs_to(7));
        assert!(!candidate.belongs_to(8));
    }
}
