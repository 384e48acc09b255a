//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible seat states during
//! development. These checks are compiled out in release builds.

use crate::inventory::SeatInventory;
use crate::models::Booking;

/// Validate that an inventory's seat sets partition `{1..total_seats}`
pub fn assert_inventory_invariants(inv: &SeatInventory) {
    if cfg!(not(debug_assertions)) {
        return;
    }

    let total = inv.total_seats();

    for &seat in inv.booked_seats() {
        debug_assert!(
            (1..=total).contains(&seat),
            "booked seat {} out of range 1..={}",
            seat,
            total
        );
    }
    for &seat in inv.buffer_seats() {
        debug_assert!(
            (1..=total).contains(&seat),
            "buffer seat {} out of range 1..={}",
            seat,
            total
        );
        debug_assert!(
            !inv.booked_seats().contains(&seat),
            "seat {} both booked and buffered",
            seat
        );
    }

    // Inactive buffer must be empty.
    debug_assert!(
        inv.buffer_active() || inv.buffer_seats().is_empty(),
        "buffer holds {} seats while inactive",
        inv.buffer_seats().len()
    );

    // Free ranges must be ascending, disjoint, and cover exactly the
    // seats that are neither booked nor buffered.
    let mut free = 0u32;
    let mut prev_end = 0u32;
    for range in inv.available_ranges() {
        debug_assert!(
            range.start > prev_end && range.end <= total,
            "free range {:?} out of order or out of bounds",
            range
        );
        for seat in range.start..=range.end {
            debug_assert!(
                !inv.booked_seats().contains(&seat) && !inv.buffer_seats().contains(&seat),
                "seat {} is free but also booked or buffered",
                seat
            );
        }
        free += range.len();
        prev_end = range.end;
    }

    debug_assert_eq!(
        free + inv.booked_seats().len() as u32 + inv.buffer_seats().len() as u32,
        total,
        "booked + buffer + free does not cover all seats"
    );
    debug_assert_eq!(free, inv.available_count(), "free run total drifted");
}

/// Validate that a booking is well-formed
pub fn assert_booking_invariants(booking: &Booking) {
    debug_assert!(!booking.seats.is_empty(), "booking {} has no seats", booking.id);
    debug_assert_eq!(
        booking.seats.len() as u32,
        booking.quantity,
        "booking {} quantity mismatch",
        booking.id
    );
    debug_assert!(
        booking.seats.windows(2).all(|w| w[0] < w[1]),
        "booking {} seats not strictly ascending",
        booking.id
    );
}
