//! Buffer reservation policy
//!
//! The buffer is the 10% of capacity withheld from ordinary bookings.
//! This module owns the two policy rules: how large the buffer is, and
//! when a booking request is allowed to drain it. Kept apart from the
//! seat-set mechanics so the trigger rule can be tested on its own.

/// Held-back fraction is 10% of capacity, rounded up.
pub fn buffer_size(total_seats: u32) -> u32 {
    (total_seats + 9) / 10
}

/// How a booking request should proceed against current availability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferDecision {
    /// Fits in the ordinary (non-buffer) pool
    Direct,
    /// Exceeds the ordinary pool but fits once the buffer is released:
    /// release the entire buffer, then retry exactly once
    ReleaseAndRetry,
    /// Exceeds capacity even with the buffer released
    Reject,
}

/// Decide the path for a request of `quantity` seats.
///
/// `available` excludes the buffer. The decision is evaluated before any
/// mutation, inside the per-event critical section, so a request either
/// fully succeeds or leaves the inventory untouched.
pub fn decide(quantity: u32, available: u32, buffer_active: bool, buffer_len: u32) -> BufferDecision {
    if quantity <= available {
        BufferDecision::Direct
    } else if buffer_active && quantity <= available + buffer_len {
        BufferDecision::ReleaseAndRetry
    } else {
        BufferDecision::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_rounds_up() {
        assert_eq!(buffer_size(100), 10);
        assert_eq!(buffer_size(95), 10);
        assert_eq!(buffer_size(91), 10);
        assert_eq!(buffer_size(90), 9);
        assert_eq!(buffer_size(1), 1);
    }

    #[test]
    fn test_direct_when_pool_suffices() {
        assert_eq!(decide(10, 10, true, 5), BufferDecision::Direct);
        assert_eq!(decide(1, 50, false, 0), BufferDecision::Direct);
    }

    #[test]
    fn test_release_trigger() {
        // 10 requested, 0 ordinary seats left, 10 buffered.
        assert_eq!(decide(10, 0, true, 10), BufferDecision::ReleaseAndRetry);
        assert_eq!(decide(11, 5, true, 6), BufferDecision::ReleaseAndRetry);
    }

    #[test]
    fn test_reject_beyond_capacity() {
        assert_eq!(decide(11, 0, true, 10), BufferDecision::Reject);
        // Inactive buffer never participates.
        assert_eq!(decide(6, 5, false, 10), BufferDecision::Reject);
    }
}
