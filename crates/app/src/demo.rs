//! Scripted full-workflow demo
//!
//! Walks one event through the whole lifecycle: buffer setup, ordinary
//! bookings, the buffer-release trigger, a group booking, and ticket
//! issuance. Safe to re-run; a leftover demo event from a previous run
//! is removed first.

use seathub_core::BookingEngine;

const DEMO_EVENT: &str = "demo001";

pub fn run(engine: &BookingEngine) {
    println!("=== DEMO: COMPLETE WORKFLOW ===\n");
    let _ = engine.delete_event(DEMO_EVENT);

    println!("Step 1: Create event with 100 seats...");
    if let Err(e) = engine.create_event(DEMO_EVENT, "Concert 2025", "Concerts", "Stadium", 100) {
        println!("[FAIL] {}", e);
        return;
    }

    println!("Step 2: Initialize buffer (10% = 10 seats hidden)...");
    report(engine.initialize_buffer(DEMO_EVENT).map(|n| format!("{} seats buffered", n)));

    println!("Step 3: Book 50 tickets (user1)...");
    report(book(engine, "user1", 50));

    println!("Step 4: Book 30 tickets (user2)...");
    report(book(engine, "user2", 30));

    println!("Step 5: View seat status...");
    print_status(engine);

    println!("\nStep 6: Book 15 more tickets (user3) - exceeds the open pool, triggers buffer release...");
    let trigger = engine.book_with_buffer("user3", DEMO_EVENT, 15);
    let first_booking = trigger.as_ref().ok().map(|b| b.clone());
    report(trigger.map(|b| format!("booking {} seats {:?}", b.id, b.seats)));

    println!("Step 7: View status after buffer release...");
    print_status(engine);

    println!("\nStep 8: Book group of 5 consecutive seats...");
    report(
        engine
            .book_group("family1", DEMO_EVENT, 5)
            .map(|b| format!("booking {} seats {:?}", b.id, b.seats)),
    );

    println!("Step 9: View available ranges...");
    match engine.available_ranges(DEMO_EVENT) {
        Ok(ranges) => println!("{}", serde_json::to_string(&ranges).unwrap_or_default()),
        Err(e) => println!("[FAIL] {}", e),
    }

    println!("\nStep 10: Generate ticket...");
    if let Some(booking) = first_booking {
        let seats: Vec<u32> = booking.seats.iter().take(3).copied().collect();
        match engine.generate_ticket("user3", DEMO_EVENT, booking.id, &seats) {
            Ok(path) => println!("Ticket saved to: {}", path.display()),
            Err(e) => println!("[FAIL] {}", e),
        }
    } else {
        println!("[SKIP] No booking to ticket");
    }

    println!("\n[OK] Demo complete!");
}

fn book(engine: &BookingEngine, user: &str, qty: u32) -> seathub_core::Result<String> {
    engine
        .book_with_buffer(user, DEMO_EVENT, qty)
        .map(|b| format!("booking {} ({} seats)", b.id, b.quantity))
}

fn print_status(engine: &BookingEngine) {
    match engine.seat_status(DEMO_EVENT) {
        Ok(status) => println!("{}", serde_json::to_string(&status).unwrap_or_default()),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn report(result: seathub_core::Result<String>) {
    match result {
        Ok(msg) => println!("[OK] {}", msg),
        Err(e) => println!("[FAIL] {}", e),
    }
}
