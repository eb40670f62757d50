pub mod candidate_repository;
pub mod party_repository;
pub mod vote_repository;
pub mod voter_repository;

pub use candidate_repository::*;
pub use party_repository::*;
pub use vote_repository::*;
pub use voter_repository::*;
