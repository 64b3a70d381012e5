pub mod summary;

pub use summary::{
    upcoming_birthdays, AgeGroups, Birthday, Debtor, GenderSplit, OverviewCounts, Widget,
};
