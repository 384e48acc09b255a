//! Booking model - an immutable record of purchased seats

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique booking identifier, assigned monotonically by the engine
pub type BookingId = u64;

/// A confirmed booking. Never mutated after creation; cancellation is a
/// status change in the surrounding profile layer, not a change here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: String,
    pub event_id: String,
    /// Booked seat numbers, ascending
    pub seats: Vec<u32>,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: BookingId, user_id: String, event_id: String, seats: Vec<u32>) -> Self {
        let quantity = seats.len() as u32;
        Self {
            id,
            user_id,
            event_id,
            seats,
            quantity,
            created_at: Utc::now(),
        }
    }

    /// Whether every seat in `seats` belongs to this booking
    pub fn covers(&self, seats: &[u32]) -> bool {
        seats.iter().all(|s| self.seats.binary_search(s).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers() {
        let b = Booking::new(5001, "alice".into(), "E001".into(), vec![3, 4, 5]);
        assert_eq!(b.quantity, 3);
        assert!(b.covers(&[3, 5]));
        assert!(b.covers(&[]));
        assert!(!b.covers(&[3, 6]));
    }
}
