//! Common types and traits for all records

pub mod record;
pub mod resource;

// Re-exports
pub use record::Record;
pub use resource::Resource;
