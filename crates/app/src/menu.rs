//! Interactive menu driver
//!
//! Thin shell over the booking engine: prompts for identifiers, calls
//! one engine operation, and prints the result. Status, ranges, and the
//! category tree are printed as JSON.

use std::io::{self, BufRead, Write};

use seathub_core::BookingEngine;

use crate::demo;

const MENU: &str = "
--- MAIN MENU ---
1. Create Event
2. Initialize Buffer Seats (10%)
3. Book Tickets (Buffer System)
4. Book Group Seats (Adaptive)
5. Generate Ticket
6. Release Buffer (Admin)
7. View Seat Status
8. View Available Ranges
9. View Event Details
10. List Events by Category
11. Delete Event
12. Demo: Full Workflow
13. Exit
";

/// Run the menu loop until the user exits
pub fn run(engine: &BookingEngine) {
    loop {
        println!("{}", MENU);
        let choice = prompt("Enter choice");
        match choice.as_str() {
            "1" => create_event(engine),
            "2" => init_buffer(engine),
            "3" => book_tickets(engine),
            "4" => book_group(engine),
            "5" => generate_ticket(engine),
            "6" => release_buffer(engine),
            "7" => view_status(engine),
            "8" => view_ranges(engine),
            "9" => view_event(engine),
            "10" => list_categories(engine),
            "11" => delete_event(engine),
            "12" => demo::run(engine),
            "13" | "q" | "exit" => {
                println!("Goodbye!");
                return;
            }
            other => println!("[FAIL] Invalid choice: {}", other),
        }
    }
}

fn prompt(label: &str) -> String {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok();
    line.trim().to_string()
}

fn prompt_u32(label: &str) -> Option<u32> {
    let raw = prompt(label);
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            println!("[FAIL] Not a number: {}", raw);
            None
        }
    }
}

fn create_event(engine: &BookingEngine) {
    let id = prompt("Event ID");
    let name = prompt("Event Name");
    let category = prompt("Category (Movies/Plays/Sports/Concerts)");
    let venue = prompt("Venue");
    let Some(total) = prompt_u32("Total Seats") else {
        return;
    };
    match engine.create_event(&id, &name, &category, &venue, total) {
        Ok(event) => println!("[OK] Event created: {} ({} seats)", event.name, event.total_seats),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn init_buffer(engine: &BookingEngine) {
    let id = prompt("Event ID");
    match engine.initialize_buffer(&id) {
        Ok(reserved) => println!("[OK] Buffer initialized ({} seats reserved)", reserved),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn book_tickets(engine: &BookingEngine) {
    let user = prompt("User ID");
    let event = prompt("Event ID");
    let Some(qty) = prompt_u32("Quantity") else {
        return;
    };
    match engine.book_with_buffer(&user, &event, qty) {
        Ok(booking) => {
            println!("[OK] Booking successful!");
            println!("Booking ID: {}", booking.id);
            println!("Seats: {:?}", booking.seats);
        }
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn book_group(engine: &BookingEngine) {
    let user = prompt("User ID");
    let event = prompt("Event ID");
    let Some(size) = prompt_u32("Group Size") else {
        return;
    };
    match engine.book_group(&user, &event, size) {
        Ok(booking) => {
            println!("[OK] Group booking successful!");
            println!("Booking ID: {}", booking.id);
            println!("Seats: {:?}", booking.seats);
        }
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn generate_ticket(engine: &BookingEngine) {
    let user = prompt("User ID");
    let event = prompt("Event ID");
    let Some(booking_id) = prompt_u32("Booking ID") else {
        return;
    };
    let raw = prompt("Seats (comma-separated)");
    let seats: Vec<u32> = raw
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    match engine.generate_ticket(&user, &event, booking_id as u64, &seats) {
        Ok(path) => {
            println!("[OK] Ticket generated!");
            println!("Path: {}", path.display());
        }
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn release_buffer(engine: &BookingEngine) {
    let id = prompt("Event ID");
    match engine.release_buffer(&id) {
        Ok(released) => println!("[OK] Buffer released ({} seats)", released),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn view_status(engine: &BookingEngine) {
    let id = prompt("Event ID");
    match engine.seat_status(&id) {
        Ok(status) => print_json(&status),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn view_ranges(engine: &BookingEngine) {
    let id = prompt("Event ID");
    match engine.available_ranges(&id) {
        Ok(ranges) => print_json(&ranges),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn view_event(engine: &BookingEngine) {
    let id = prompt("Event ID");
    match engine.get_event(&id) {
        Ok(event) => print_json(&event),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn list_categories(engine: &BookingEngine) {
    print_json(&engine.list_by_category());
}

fn delete_event(engine: &BookingEngine) {
    let id = prompt("Event ID");
    match engine.delete_event(&id) {
        Ok(()) => println!("[OK] Event deleted"),
        Err(e) => println!("[FAIL] {}", e),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("[FAIL] {}", e),
    }
}
