pub mod calendar;
pub mod collation;
pub mod format;
pub mod pagination;
pub mod search;
