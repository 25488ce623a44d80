use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Appointment request submitted by a clinic customer from the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    pub preferred_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: BookingStatus,
    /// Staff-facing note, set from the admin area only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public booking submission, before the server assigns id and status.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub branch_id: Option<String>,
    pub preferred_date: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl Booking {
    pub fn from_request(request: BookingRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: request.customer_name,
            phone: request.phone,
            email: request.email,
            service_id: request.service_id,
            branch_id: request.branch_id,
            preferred_date: request.preferred_date,
            message: request.message,
            status: BookingStatus::Pending,
            notes: None,
            created_at: Utc::now(),
        }
    }
}
