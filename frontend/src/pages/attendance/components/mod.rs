pub mod filters;
pub mod form;
pub mod list;

pub use filters::AttendanceFilterBar;
pub use form::AttendanceForm;
pub use list::AttendanceList;
