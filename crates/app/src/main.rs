//! Seathub - seat-inventory booking engine CLI
//!
//! Interactive driver over the booking engine: events, buffered and
//! group bookings, seat maps, and ticket issuance.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod demo;
mod menu;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Seathub");

    let config = config::AppConfig::load();

    let engine = match &config.tickets.output_dir {
        Some(dir) => seathub_core::BookingEngine::with_ticket_dir(dir.clone()),
        None => seathub_core::BookingEngine::new(),
    };
    let engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to initialize booking engine: {}", e);
            std::process::exit(1);
        }
    };

    for seed in &config.seed_events {
        if let Err(e) = engine.create_event(
            &seed.id,
            &seed.name,
            &seed.category,
            &seed.venue,
            seed.total_seats,
        ) {
            tracing::warn!(event_id = %seed.id, error = %e, "Skipping seed event");
        }
    }

    println!("=== SEATHUB TICKET BOOKING ===");
    println!("Features:");
    println!("  1. 10% Buffer Seat Reservation");
    println!("  2. Adaptive Group Seating (Segment Tree)");
    println!("  3. Ticket Issuance");

    menu::run(&engine);
}
