use crate::{
    api::DashboardStats,
    components::cards::{StatCardData, StatTone},
};

pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load dashboard data. Please make sure the backend server is running.";
pub const NO_RECENT_MESSAGE: &str = "No recent attendance records found. Start marking attendance!";

pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCardData> {
    vec![
        StatCardData {
            icon: "👥",
            label: "Total Employees",
            value: stats.total_employees.to_string(),
            tone: StatTone::Primary,
        },
        StatCardData {
            icon: "✅",
            label: "Present Today",
            value: stats.present_today.to_string(),
            tone: StatTone::Success,
        },
        StatCardData {
            icon: "❌",
            label: "Absent Today",
            value: stats.absent_today.to_string(),
            tone: StatTone::Danger,
        },
        StatCardData {
            icon: "📊",
            label: "Attendance Rate",
            value: format!("{}%", stats.attendance_rate),
            tone: StatTone::Warning,
        },
    ]
}
