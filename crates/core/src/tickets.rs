//! Ticket issuance gateway
//!
//! Validates that a ticket request matches an existing booking, then
//! hands the rendering off to a `TicketRenderer`. Byte-level PDF
//! rendering lives outside this crate; the default renderer writes a
//! small JSON placeholder so the artifact path is real and testable.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use directories::ProjectDirs;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Booking, BookingId, Ticket};

/// Renders a ticket artifact at `ticket.path`
pub trait TicketRenderer: Send + Sync {
    fn render(&self, ticket: &Ticket) -> Result<()>;
}

/// Default renderer: writes ticket metadata as JSON at the artifact path
pub struct PlaceholderRenderer;

impl TicketRenderer for PlaceholderRenderer {
    fn render(&self, ticket: &Ticket) -> Result<()> {
        let meta = serde_json::json!({
            "booking_id": ticket.booking_id,
            "user_id": ticket.user_id,
            "event_id": ticket.event_id,
            "seats": ticket.seats,
            "issued_at": ticket.issued_at.to_rfc3339(),
        });
        fs::write(&ticket.path, serde_json::to_string_pretty(&meta)?)?;
        Ok(())
    }
}

/// Issues tickets for confirmed bookings
pub struct TicketGateway {
    base_path: PathBuf,
    renderer: Box<dyn TicketRenderer>,
    tickets: Mutex<HashMap<BookingId, Ticket>>,
}

impl TicketGateway {
    /// Create a gateway writing artifacts under the platform data dir
    pub fn new() -> Result<Self> {
        Self::with_base_path(Self::default_base_path()?)
    }

    /// Create with custom artifact directory (for testing)
    pub fn with_base_path(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path)?;
        Ok(Self {
            base_path,
            renderer: Box::new(PlaceholderRenderer),
            tickets: Mutex::new(HashMap::new()),
        })
    }

    /// Swap in a different renderer
    pub fn with_renderer(mut self, renderer: Box<dyn TicketRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    fn default_base_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "seathub", "seathub").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;
        Ok(dirs.data_dir().join("tickets"))
    }

    /// Issue a ticket for `booking`.
    ///
    /// The request must come from the booking's owner, reference the
    /// booking's event, and claim only seats the booking holds; anything
    /// else fails validation and produces no artifact. Issuing twice for
    /// the same booking returns the existing path.
    pub fn issue(
        &self,
        booking: &Booking,
        user_id: &str,
        event_id: &str,
        seats: &[u32],
    ) -> Result<PathBuf> {
        if booking.user_id != user_id {
            return Err(Error::Validation(format!(
                "booking {} does not belong to user {}",
                booking.id, user_id
            )));
        }
        if booking.event_id != event_id {
            return Err(Error::Validation(format!(
                "booking {} is not for event {}",
                booking.id, event_id
            )));
        }
        if seats.is_empty() {
            return Err(Error::Validation("no seats requested".into()));
        }
        if !booking.covers(seats) {
            return Err(Error::Validation(format!(
                "seats {:?} are not all part of booking {}",
                seats, booking.id
            )));
        }

        let mut tickets = self.tickets.lock().unwrap();
        if let Some(existing) = tickets.get(&booking.id) {
            return Ok(existing.path.clone());
        }

        // Opaque artifact name: callers get the path back, never guess it.
        let path = self
            .base_path
            .join(format!("ticket-{}-{}.pdf", booking.id, Uuid::new_v4()));
        let ticket = Ticket {
            booking_id: booking.id,
            user_id: booking.user_id.clone(),
            event_id: booking.event_id.clone(),
            seats: seats.to_vec(),
            path: path.clone(),
            issued_at: Utc::now(),
        };
        self.renderer.render(&ticket)?;
        tracing::info!(booking_id = booking.id, path = %path.display(), "Issued ticket");
        tickets.insert(booking.id, ticket);
        Ok(path)
    }

    /// Artifact path for an already-issued ticket
    pub fn path_for(&self, booking_id: BookingId) -> Result<PathBuf> {
        self.tickets
            .lock()
            .unwrap()
            .get(&booking_id)
            .map(|t| t.path.clone())
            .ok_or_else(|| Error::NotFound(format!("ticket for booking {}", booking_id)))
    }

    pub fn get(&self, booking_id: BookingId) -> Option<Ticket> {
        self.tickets.lock().unwrap().get(&booking_id).cloned()
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn booking() -> Booking {
        Booking::new(5001, "alice".into(), "E001".into(), vec![15, 16, 17])
    }

    #[test]
    fn test_issue_writes_artifact() {
        let dir = tempdir().unwrap();
        let gateway = TicketGateway::with_base_path(dir.path().to_path_buf()).unwrap();

        let path = gateway.issue(&booking(), "alice", "E001", &[15, 16]).unwrap();
        assert!(path.exists());
        assert_eq!(gateway.path_for(5001).unwrap(), path);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"event_id\": \"E001\""));
    }

    #[test]
    fn test_foreign_seats_rejected() {
        let dir = tempdir().unwrap();
        let gateway = TicketGateway::with_base_path(dir.path().to_path_buf()).unwrap();

        // Seat 18 was never part of the booking.
        let err = gateway
            .issue(&booking(), "alice", "E001", &[16, 18])
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // No artifact and no record.
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
        assert!(matches!(gateway.path_for(5001), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_wrong_owner_or_event_rejected() {
        let dir = tempdir().unwrap();
        let gateway = TicketGateway::with_base_path(dir.path().to_path_buf()).unwrap();

        assert!(matches!(
            gateway.issue(&booking(), "bob", "E001", &[15]),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            gateway.issue(&booking(), "alice", "E002", &[15]),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_reissue_returns_same_path() {
        let dir = tempdir().unwrap();
        let gateway = TicketGateway::with_base_path(dir.path().to_path_buf()).unwrap();

        let first = gateway.issue(&booking(), "alice", "E001", &[15]).unwrap();
        let second = gateway.issue(&booking(), "alice", "E001", &[15, 16]).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
