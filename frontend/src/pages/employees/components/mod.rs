pub mod form;
pub mod list;
pub mod stats;

pub use form::EmployeeForm;
pub use list::EmployeeList;
pub use stats::EmployeeStatsCard;
