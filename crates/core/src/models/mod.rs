//! Core data models

mod booking;
mod event;
mod ticket;

pub use booking::{Booking, BookingId};
pub use event::{Category, Event};
pub use ticket::Ticket;
