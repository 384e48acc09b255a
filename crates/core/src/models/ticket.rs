//! Ticket model - an issued artifact for a booking

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BookingId;

/// An issued ticket. Exists only after its booking does; the inventory
/// never requires a ticket for a booking to be valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub booking_id: BookingId,
    pub user_id: String,
    pub event_id: String,
    pub seats: Vec<u32>,
    /// Path of the rendered artifact
    pub path: PathBuf,
    pub issued_at: DateTime<Utc>,
}
