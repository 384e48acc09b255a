//! Seathub Core Library
//!
//! Seat-inventory booking engine: event registry, per-event seat state
//! with a held-back buffer, contiguous group allocation, and ticket
//! issuance for the Seathub platform.

pub mod engine;
pub mod error;
pub mod inventory;
pub mod invariants;
pub mod models;
pub mod registry;
pub mod tickets;

pub use engine::BookingEngine;
pub use error::{Error, Result};
pub use inventory::{SeatInventory, SeatRange, SeatStatus};
pub use models::{Booking, BookingId, Category, Event, Ticket};
pub use registry::{CategoryGroup, EventRegistry, RegisteredEvent};
pub use tickets::{PlaceholderRenderer, TicketGateway, TicketRenderer};
