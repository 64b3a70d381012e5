pub mod aggregate;

pub use aggregate::{Vote, VoteTally};
