pub mod aggregate;

pub use aggregate::Snapshot;
