//! Booking engine facade
//!
//! One service struct owning the event registry, the booking ledger, and
//! the ticket gateway. All operations take `&self` and key off explicit
//! event/booking identifiers; per-event state is serialized by the lock
//! on that event's inventory, so traffic on different events never
//! contends.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::instrument;

use crate::error::{Error, Result};
use crate::inventory::{SeatRange, SeatStatus};
use crate::invariants;
use crate::models::{Booking, BookingId, Event};
use crate::registry::{CategoryGroup, EventRegistry};
use crate::tickets::TicketGateway;

// First issued booking id; the counter pre-increments from 5000.
const BOOKING_ID_BASE: u64 = 5000;

pub struct BookingEngine {
    registry: EventRegistry,
    bookings: Mutex<HashMap<BookingId, Booking>>,
    next_booking_id: AtomicU64,
    tickets: TicketGateway,
}

impl BookingEngine {
    /// Engine with ticket artifacts under the platform data dir
    pub fn new() -> Result<Self> {
        Ok(Self::with_gateway(TicketGateway::new()?))
    }

    /// Engine writing ticket artifacts under `ticket_dir`
    pub fn with_ticket_dir(ticket_dir: PathBuf) -> Result<Self> {
        Ok(Self::with_gateway(TicketGateway::with_base_path(ticket_dir)?))
    }

    fn with_gateway(tickets: TicketGateway) -> Self {
        Self {
            registry: EventRegistry::new(),
            bookings: Mutex::new(HashMap::new()),
            next_booking_id: AtomicU64::new(BOOKING_ID_BASE),
            tickets,
        }
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    // ===== Events =====

    #[instrument(skip(self))]
    pub fn create_event(
        &self,
        id: &str,
        name: &str,
        category: &str,
        venue: &str,
        total_seats: u32,
    ) -> Result<Event> {
        if id.is_empty() {
            return Err(Error::Validation("empty event id".into()));
        }
        let category = category.parse()?;
        self.registry.create(id, name, category, venue, total_seats)
    }

    #[instrument(skip(self))]
    pub fn delete_event(&self, id: &str) -> Result<()> {
        self.registry.remove(id)
    }

    pub fn get_event(&self, id: &str) -> Result<Event> {
        Ok(self.registry.get(id)?.event.clone())
    }

    pub fn list_by_category(&self) -> Vec<CategoryGroup> {
        self.registry.by_category()
    }

    // ===== Buffer =====

    #[instrument(skip(self))]
    pub fn initialize_buffer(&self, event_id: &str) -> Result<u32> {
        let slot = self.registry.get(event_id)?;
        let mut inventory = slot.inventory.lock().unwrap();
        let reserved = inventory.initialize_buffer()?;
        tracing::info!(event_id, reserved, "Buffer initialized");
        Ok(reserved)
    }

    #[instrument(skip(self))]
    pub fn release_buffer(&self, event_id: &str) -> Result<u32> {
        let slot = self.registry.get(event_id)?;
        let mut inventory = slot.inventory.lock().unwrap();
        let released = inventory.release_buffer()?;
        tracing::info!(event_id, released, "Buffer released by admin");
        Ok(released)
    }

    // ===== Bookings =====

    /// Book `quantity` seats, draining the buffer as a last resort.
    /// The release-and-retry sequence runs inside one lock acquisition,
    /// so no other request can observe the half-released state.
    #[instrument(skip(self))]
    pub fn book_with_buffer(&self, user_id: &str, event_id: &str, quantity: u32) -> Result<Booking> {
        if user_id.is_empty() {
            return Err(Error::Validation("empty user id".into()));
        }
        let slot = self.registry.get(event_id)?;
        let outcome = {
            let mut inventory = slot.inventory.lock().unwrap();
            inventory.book_with_buffer(quantity)?
        };
        if outcome.buffer_released {
            tracing::info!(event_id, quantity, "Buffer release triggered by booking");
        }
        Ok(self.record_booking(user_id, event_id, outcome.seats))
    }

    /// Book `group_size` contiguous seats, best-fit. Never consumes the
    /// buffer; failure means the room is too fragmented for the group.
    #[instrument(skip(self))]
    pub fn book_group(&self, user_id: &str, event_id: &str, group_size: u32) -> Result<Booking> {
        if user_id.is_empty() {
            return Err(Error::Validation("empty user id".into()));
        }
        let slot = self.registry.get(event_id)?;
        let seats = {
            let mut inventory = slot.inventory.lock().unwrap();
            inventory.book_group(group_size)?
        };
        Ok(self.record_booking(user_id, event_id, seats))
    }

    pub fn get_booking(&self, booking_id: BookingId) -> Result<Booking> {
        self.bookings
            .lock()
            .unwrap()
            .get(&booking_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("booking {}", booking_id)))
    }

    fn record_booking(&self, user_id: &str, event_id: &str, seats: Vec<u32>) -> Booking {
        let id = self.next_booking_id.fetch_add(1, Ordering::Relaxed) + 1;
        let booking = Booking::new(id, user_id.to_string(), event_id.to_string(), seats);
        invariants::assert_booking_invariants(&booking);
        tracing::info!(
            booking_id = booking.id,
            user_id,
            event_id,
            quantity = booking.quantity,
            "Booking confirmed"
        );
        self.bookings.lock().unwrap().insert(booking.id, booking.clone());
        booking
    }

    // ===== Queries =====

    pub fn seat_status(&self, event_id: &str) -> Result<SeatStatus> {
        let slot = self.registry.get(event_id)?;
        let inventory = slot.inventory.lock().unwrap();
        Ok(inventory.status())
    }

    pub fn available_ranges(&self, event_id: &str) -> Result<Vec<SeatRange>> {
        let slot = self.registry.get(event_id)?;
        let inventory = slot.inventory.lock().unwrap();
        Ok(inventory.available_ranges())
    }

    // ===== Tickets =====

    #[instrument(skip(self, seats))]
    pub fn generate_ticket(
        &self,
        user_id: &str,
        event_id: &str,
        booking_id: BookingId,
        seats: &[u32],
    ) -> Result<PathBuf> {
        let booking = self.get_booking(booking_id)?;
        self.tickets.issue(&booking, user_id, event_id, seats)
    }

    pub fn ticket_path(&self, booking_id: BookingId) -> Result<PathBuf> {
        self.tickets.path_for(booking_id)
    }
}
