pub mod code_select;
pub mod datatable;
pub mod day_picker;
pub mod month_picker;
pub mod pagination_controls;
pub mod record_list;

pub use code_select::CodeSelect;
pub use datatable::{Column, Datatable};
pub use day_picker::DayPicker;
pub use month_picker::MonthPicker;
pub use pagination_controls::PaginationControls;
pub use record_list::{RecordListPage, RecordListState};
