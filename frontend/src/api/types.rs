use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Response wrapper shared by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl<T> ApiEnvelope<T> {
    /// A 2xx body can still report `success: false`; treat that as an API error.
    pub fn ensure_success(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::from_error_value(200, self.error.as_ref(), None))
        }
    }
}

/// Rows of a list endpoint with the total the backend reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
        }
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// Falls back to the row count when the body has no `count`.
    pub fn into_listing(self) -> Listing<T> {
        let items = self.data.unwrap_or_default();
        let count = self.count.unwrap_or(items.len());
        Listing { items, count }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub total_days: u64,
    #[serde(default)]
    pub present_days: u64,
    #[serde(default)]
    pub absent_days: u64,
    #[serde(default)]
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    #[serde(default)]
    pub employee: Option<i64>,
    pub employee_emp_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAttendance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
}

/// Narrowing for `GET /attendance/`. Unset keys never reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilters {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilters {
    pub fn is_empty(&self) -> bool {
        self.query_params().is_empty()
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(employee_id) = &self.employee_id {
            let employee_id = employee_id.trim();
            if !employee_id.is_empty() {
                params.push(("employee_id", employee_id.to_string()));
            }
        }
        if let Some(date) = self.date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: u64,
    #[serde(default)]
    pub present_today: u64,
    #[serde(default)]
    pub absent_today: u64,
    #[serde(default)]
    pub attendance_rate: f64,
    #[serde(default)]
    pub today_date: Option<NaiveDate>,
    #[serde(default)]
    pub recent_attendance: Vec<AttendanceRecord>,
}

/// Messages attached to one field of a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldMessages {
    List(Vec<String>),
    Nested(String),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub messages: FieldMessages,
}

impl FieldError {
    pub fn line(&self) -> String {
        match &self.messages {
            FieldMessages::List(messages) => format!("{}: {}", self.field, messages.join(", ")),
            FieldMessages::Nested(message) => message.clone(),
            FieldMessages::Raw(value) => format!("{}: {}", self.field, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorDetail {
    /// Nothing beyond the top-level message.
    Message,
    /// Field-keyed validation errors, one entry per field.
    Fields(Vec<FieldError>),
    /// The request never produced a usable response.
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub detail: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiError {
    pub fn network(detail: impl std::fmt::Display) -> Self {
        Self {
            status: 500,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            detail: ErrorDetail::Transport(detail.to_string()),
            body: None,
        }
    }

    pub fn from_response(status: u16, body: Value) -> Self {
        let error = body.get("error").cloned();
        Self::from_error_value(status, error.as_ref(), Some(body))
    }

    pub fn from_error_value(status: u16, error: Option<&Value>, body: Option<Value>) -> Self {
        Self {
            status,
            message: extract_message(error),
            detail: extract_detail(error),
            body,
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match &self.detail {
            ErrorDetail::Fields(fields) => fields,
            _ => &[],
        }
    }

    /// Text shown to the user: one line per field for validation errors,
    /// otherwise the top-level message.
    pub fn display_text(&self) -> String {
        match &self.detail {
            ErrorDetail::Fields(fields) if !fields.is_empty() => fields
                .iter()
                .map(FieldError::line)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => self.message.clone(),
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.display_text()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.display_text().into_view()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn extract_message(error: Option<&Value>) -> String {
    non_empty_str(error.and_then(|e| e.get("message")))
        .or_else(|| non_empty_str(error))
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

fn extract_detail(error: Option<&Value>) -> ErrorDetail {
    let Some(Value::Object(map)) = error else {
        return ErrorDetail::Message;
    };
    if map.contains_key("message") {
        return ErrorDetail::Message;
    }
    let fields = map
        .iter()
        .map(|(field, value)| FieldError {
            field: field.clone(),
            messages: field_messages(value),
        })
        .collect::<Vec<_>>();
    if fields.is_empty() {
        ErrorDetail::Message
    } else {
        ErrorDetail::Fields(fields)
    }
}

fn field_messages(value: &Value) -> FieldMessages {
    match value {
        Value::Array(items) => FieldMessages::List(items.iter().map(plain_text).collect()),
        Value::Object(map) => match map.get("message") {
            Some(message) => FieldMessages::Nested(plain_text(message)),
            None => FieldMessages::Raw(value.to_string()),
        },
        other => FieldMessages::Raw(plain_text(other)),
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
