//! Appointment request entity model and DTOs.

use chrono::NaiveDate;
use maris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Appointment lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status string. Returns `None` for anything outside the enum.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub location: String,
    pub scheduled_on: NaiveDate,
    /// Free-form time of day, e.g. `"09:00"`.
    pub scheduled_at: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a visitor-submitted appointment request. Validated before insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointment {
    #[validate(length(min = 1, message = "customer name is required"))]
    pub customer_name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "service type is required"))]
    pub service_type: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    pub scheduled_on: NaiveDate,
    #[validate(length(min = 1, message = "time is required"))]
    pub scheduled_at: String,
    pub message: Option<String>,
}
