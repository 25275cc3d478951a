pub mod initialize_poll;
pub use initialize_poll::*;

pub mod add_candidate;
pub use add_candidate::*;

pub mod vote;
pub use vote::*;

pub mod delete_candidate;
pub use delete_candidate::*;

pub mod delete_poll;
pub use delete_poll::*;
