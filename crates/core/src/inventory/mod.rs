//! Seat inventory engine
//!
//! The canonical source of truth for which seats of one event are booked,
//! buffered, or available. Every mutating operation is all-or-nothing:
//! it either completes fully or returns an error with the seat sets
//! exactly as they were.

pub mod buffer;
mod seat_tree;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use self::buffer::BufferDecision;

pub use seat_tree::{SeatRange, SeatTree};

/// Snapshot of an event's seat counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStatus {
    pub booked_count: u32,
    pub buffer_count: u32,
    pub buffer_active: bool,
    pub available_count: u32,
}

/// Result of a buffered booking, for the caller's logging
#[derive(Debug, Clone)]
pub struct BookedSeats {
    /// Allocated seat numbers, ascending
    pub seats: Vec<u32>,
    /// Whether this request tripped the buffer release
    pub buffer_released: bool,
}

/// Per-event seat state. Seats are numbered `1..=total_seats`.
///
/// Invariant: booked, buffer (while active), and the free seats in the
/// tree partition `{1..total_seats}` at all times.
#[derive(Debug, Clone)]
pub struct SeatInventory {
    total_seats: u32,
    booked: BTreeSet<u32>,
    buffer: BTreeSet<u32>,
    buffer_active: bool,
    tree: SeatTree,
}

impl SeatInventory {
    /// Create an empty inventory: no bookings, no buffer.
    pub fn new(total_seats: u32) -> Self {
        debug_assert!(total_seats > 0);
        Self {
            total_seats,
            booked: BTreeSet::new(),
            buffer: BTreeSet::new(),
            buffer_active: false,
            tree: SeatTree::new(total_seats),
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    pub fn buffer_active(&self) -> bool {
        self.buffer_active
    }

    pub fn booked_seats(&self) -> &BTreeSet<u32> {
        &self.booked
    }

    pub fn buffer_seats(&self) -> &BTreeSet<u32> {
        &self.buffer
    }

    /// Seats purchasable by an ordinary booking right now
    pub fn available_count(&self) -> u32 {
        let withheld = if self.buffer_active {
            self.buffer.len() as u32
        } else {
            0
        };
        self.total_seats - self.booked.len() as u32 - withheld
    }

    pub fn status(&self) -> SeatStatus {
        SeatStatus {
            booked_count: self.booked.len() as u32,
            buffer_count: if self.buffer_active {
                self.buffer.len() as u32
            } else {
                0
            },
            buffer_active: self.buffer_active,
            available_count: self.available_count(),
        }
    }

    /// Contiguous free runs, ascending by start seat. Buffered seats are
    /// not free while the buffer is active.
    pub fn available_ranges(&self) -> Vec<SeatRange> {
        self.tree.free_runs()
    }

    /// Withhold `ceil(total * 0.10)` seats from the available pool.
    ///
    /// Selection is deterministic: the highest-numbered available seats,
    /// so ordinary lowest-first bookings and the buffer approach each
    /// other from opposite ends. If fewer seats than the policy size are
    /// available, the whole remaining pool becomes the buffer. Returns
    /// the number of seats withheld.
    pub fn initialize_buffer(&mut self) -> Result<u32> {
        if self.buffer_active {
            return Err(Error::AlreadyInitialized);
        }
        let want = buffer::buffer_size(self.total_seats);
        let picked: Vec<u32> = self
            .tree
            .free_runs()
            .into_iter()
            .rev()
            .flat_map(|r| (r.start..=r.end).rev())
            .take(want as usize)
            .collect();
        for &seat in &picked {
            self.tree.set_occupied(seat);
            self.buffer.insert(seat);
        }
        self.buffer_active = true;
        crate::invariants::assert_inventory_invariants(self);
        Ok(picked.len() as u32)
    }

    /// Book `quantity` seats, draining the buffer as a last resort.
    ///
    /// The ordinary path takes the lowest-numbered available seats. When
    /// the request exceeds the ordinary pool but fits once the buffer is
    /// counted, the entire buffer is released and the request retried
    /// exactly once; partial consumption of the buffer with the request
    /// still unmet never happens.
    pub fn book_with_buffer(&mut self, quantity: u32) -> Result<BookedSeats> {
        if quantity == 0 {
            return Err(Error::InvalidCapacity(0));
        }
        let available = self.available_count();
        let buffer_len = self.buffer.len() as u32;
        match buffer::decide(quantity, available, self.buffer_active, buffer_len) {
            BufferDecision::Direct => Ok(BookedSeats {
                seats: self.take_lowest(quantity),
                buffer_released: false,
            }),
            BufferDecision::ReleaseAndRetry => {
                self.release_buffer_seats();
                // The merged pool is guaranteed to cover the request.
                Ok(BookedSeats {
                    seats: self.take_lowest(quantity),
                    buffer_released: true,
                })
            }
            BufferDecision::Reject => {
                let reachable = if self.buffer_active {
                    available + buffer_len
                } else {
                    available
                };
                Err(Error::InsufficientSeats {
                    requested: quantity,
                    reachable,
                })
            }
        }
    }

    /// Book `group_size` contiguous seats, best-fit.
    ///
    /// Picks the smallest free run that fits, ties broken by lowest start
    /// seat. Never spills across runs and never touches the buffer; a
    /// group that cannot be seated together fails with the inventory
    /// unchanged.
    pub fn book_group(&mut self, group_size: u32) -> Result<Vec<u32>> {
        if group_size == 0 {
            return Err(Error::InvalidCapacity(0));
        }
        let run = self
            .tree
            .best_fit(group_size)
            .ok_or(Error::NoContiguousBlock(group_size))?;
        let seats: Vec<u32> = (run.start..run.start + group_size).collect();
        for &seat in &seats {
            self.tree.set_occupied(seat);
            self.booked.insert(seat);
        }
        crate::invariants::assert_inventory_invariants(self);
        Ok(seats)
    }

    /// Unconditionally return the buffer to the available pool.
    /// Returns the number of seats released.
    pub fn release_buffer(&mut self) -> Result<u32> {
        if !self.buffer_active {
            return Err(Error::NothingToRelease);
        }
        let released = self.release_buffer_seats();
        crate::invariants::assert_inventory_invariants(self);
        Ok(released)
    }

    fn release_buffer_seats(&mut self) -> u32 {
        let released = self.buffer.len() as u32;
        for &seat in &self.buffer {
            self.tree.set_free(seat);
        }
        self.buffer.clear();
        self.buffer_active = false;
        released
    }

    // Caller has verified `quantity` free seats exist.
    fn take_lowest(&mut self, quantity: u32) -> Vec<u32> {
        let mut seats = Vec::with_capacity(quantity as usize);
        'runs: for run in self.tree.free_runs() {
            for seat in run.start..=run.end {
                seats.push(seat);
                if seats.len() == quantity as usize {
                    break 'runs;
                }
            }
        }
        debug_assert_eq!(seats.len(), quantity as usize);
        for &seat in &seats {
            self.tree.set_occupied(seat);
            self.booked.insert(seat);
        }
        crate::invariants::assert_inventory_invariants(self);
        seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sizing() {
        let mut inv = SeatInventory::new(100);
        assert_eq!(inv.initialize_buffer().unwrap(), 10);
        assert_eq!(inv.status().buffer_count, 10);

        let mut inv = SeatInventory::new(95);
        assert_eq!(inv.initialize_buffer().unwrap(), 10);
    }

    #[test]
    fn test_buffer_takes_highest_seats() {
        let mut inv = SeatInventory::new(20);
        inv.initialize_buffer().unwrap();
        let buffered: Vec<u32> = inv.buffer_seats().iter().copied().collect();
        assert_eq!(buffered, vec![19, 20]);
        assert_eq!(inv.available_ranges(), vec![SeatRange { start: 1, end: 18 }]);
    }

    #[test]
    fn test_double_initialize_rejected() {
        let mut inv = SeatInventory::new(50);
        inv.initialize_buffer().unwrap();
        assert!(matches!(
            inv.initialize_buffer(),
            Err(Error::AlreadyInitialized)
        ));
        assert_eq!(inv.status().buffer_count, 5);
    }

    #[test]
    fn test_booking_takes_lowest_first() {
        let mut inv = SeatInventory::new(10);
        let out = inv.book_with_buffer(3).unwrap();
        assert_eq!(out.seats, vec![1, 2, 3]);
        assert!(!out.buffer_released);
        let out = inv.book_with_buffer(2).unwrap();
        assert_eq!(out.seats, vec![4, 5]);
    }

    #[test]
    fn test_booking_never_touches_intact_buffer() {
        let mut inv = SeatInventory::new(100);
        inv.initialize_buffer().unwrap();
        inv.book_with_buffer(90).unwrap();
        // Pool exhausted, buffer of 10 still intact.
        assert!(inv.buffer_active());
        assert_eq!(inv.status().buffer_count, 10);
        assert_eq!(inv.available_count(), 0);
    }

    #[test]
    fn test_release_trigger_drains_whole_buffer() {
        let mut inv = SeatInventory::new(100);
        inv.initialize_buffer().unwrap();
        inv.book_with_buffer(50).unwrap();
        inv.book_with_buffer(30).unwrap();
        assert_eq!(inv.available_count(), 10);
        assert!(inv.buffer_active());

        // A request of exactly 10 still fits the ordinary pool and must
        // not touch the buffer; 11 exceeds it and trips the release.
        let out = inv.book_with_buffer(10).unwrap();
        assert!(!out.buffer_released);
        inv.release_buffer().unwrap();
        let mut inv = SeatInventory::new(100);
        inv.initialize_buffer().unwrap();
        inv.book_with_buffer(50).unwrap();
        inv.book_with_buffer(30).unwrap();
        let out = inv.book_with_buffer(11).unwrap();
        assert!(out.buffer_released);
        assert!(!inv.buffer_active());
        assert_eq!(inv.status().buffer_count, 0);
        assert_eq!(inv.available_count(), 100 - 50 - 30 - 11);
    }

    #[test]
    fn test_overflow_leaves_state_unchanged() {
        let mut inv = SeatInventory::new(100);
        inv.initialize_buffer().unwrap();
        inv.book_with_buffer(85).unwrap();
        let before = inv.status();
        let ranges_before = inv.available_ranges();

        // 5 available + 10 buffer = 15 reachable; 16 must fail cleanly.
        let err = inv.book_with_buffer(16).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientSeats {
                requested: 16,
                reachable: 15
            }
        ));
        assert_eq!(inv.status(), before);
        assert_eq!(inv.available_ranges(), ranges_before);
        assert!(inv.buffer_active());
    }

    #[test]
    fn test_admin_release() {
        let mut inv = SeatInventory::new(40);
        inv.initialize_buffer().unwrap();
        assert_eq!(inv.release_buffer().unwrap(), 4);
        assert!(!inv.buffer_active());
        assert_eq!(inv.available_count(), 40);
        assert!(matches!(inv.release_buffer(), Err(Error::NothingToRelease)));
    }

    #[test]
    fn test_group_best_fit() {
        let mut inv = SeatInventory::new(20);
        // Carve the pool into [1-5] and [10-20].
        for seat in [6, 7, 8, 9] {
            inv.booked.insert(seat);
            inv.tree.set_occupied(seat);
        }
        let seats = inv.book_group(4).unwrap();
        assert_eq!(seats, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_group_never_spills_or_drains_buffer() {
        let mut inv = SeatInventory::new(10);
        inv.initialize_buffer().unwrap(); // seat 10 buffered
        inv.book_with_buffer(7).unwrap(); // seats 1-7
        // Free run is [8-9]; a group of 3 could only fit using seat 10.
        let before = inv.status();
        assert!(matches!(
            inv.book_group(3),
            Err(Error::NoContiguousBlock(3))
        ));
        assert_eq!(inv.status(), before);
        assert!(inv.buffer_active());
    }

    #[test]
    fn test_status_read_is_idempotent() {
        let mut inv = SeatInventory::new(30);
        inv.initialize_buffer().unwrap();
        inv.book_with_buffer(5).unwrap();
        assert_eq!(inv.status(), inv.status());
        assert_eq!(inv.available_ranges(), inv.available_ranges());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut inv = SeatInventory::new(10);
        assert!(matches!(
            inv.book_with_buffer(0),
            Err(Error::InvalidCapacity(0))
        ));
        assert!(matches!(inv.book_group(0), Err(Error::InvalidCapacity(0))));
    }
}
