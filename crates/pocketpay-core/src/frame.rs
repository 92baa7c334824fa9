//! Animation-frame coalescing.
//!
//! A `FrameGate` holds at most one pending frame request. Requesting again
//! cancels the previous request and issues a fresh ticket, so any number of
//! updates between two frames collapse into a single frame of work. The UI
//! owns the actual cadence (a ~16 ms ticker) and fires whatever ticket is
//! pending when it wakes.

/// Handle for one scheduled frame. Only the most recent ticket is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTicket(u64);

/// Single-slot frame scheduler with cancel-and-reschedule semantics
#[derive(Debug, Default, Clone)]
pub struct FrameGate {
    issued: u64,
    pending: Option<u64>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a frame, cancelling any frame still pending.
    pub fn request(&mut self) -> FrameTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        FrameTicket(self.issued)
    }

    /// Consume `ticket` if it is still the live request.
    ///
    /// Returns `false` for cancelled or superseded tickets.
    pub fn fire(&mut self, ticket: FrameTicket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending request, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The ticket a frame callback should fire right now.
    pub fn pending(&self) -> Option<FrameTicket> {
        self.pending.map(FrameTicket)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
