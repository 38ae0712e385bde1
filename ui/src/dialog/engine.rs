//! Open/close lifecycle for the dialog shell, kept apart from rendering so
//! the animation sequencing can be unit tested.
//!
//! The caller owns the open *request*; this machine owns everything between
//! "looks closed" and "is closed". A user-initiated close plays the exit
//! animation first and notifies the caller after a fixed delay. An external
//! close (the request flipping to false) skips the animation entirely and
//! invalidates any timer still in flight.

/// How long the exit animation runs before the caller hears about the close.
pub const CLOSE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Open,
    Closing,
}

/// Handed out when a close begins; redeemed when the deferred notification
/// comes due. Tickets from a superseded close never redeem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket {
    epoch: u64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone)]
pub struct DialogEngine {
    phase: DialogPhase,
    observed_open: bool,
    epoch: u64,
}

impl DialogEngine {
    pub fn new(open: bool) -> Self {
        Self {
            phase: if open {
                DialogPhase::Open
            } else {
                DialogPhase::Closed
            },
            observed_open: open,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// The caller request this machine last mirrored.
    pub fn observed_open(&self) -> bool {
        self.observed_open
    }

    /// Whether the panel should render in its settled, animated-in state.
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, DialogPhase::Open)
    }

    /// Mirror the caller's open request. Reopening clears a pending exit;
    /// an external close tears the dialog down without the animation.
    pub fn sync_open(&mut self, open: bool) {
        self.observed_open = open;
        if open {
            self.phase = DialogPhase::Open;
        } else {
            self.phase = DialogPhase::Closed;
        }
        // Either direction makes an in-flight close timer stale.
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Begin the exit animation. Returns the ticket for the deferred caller
    /// notification, or `None` when the dialog is disabled or already gone.
    pub fn request_close(&mut self, disabled: bool) -> Option<CloseTicket> {
        if disabled || matches!(self.phase, DialogPhase::Closed) {
            return None;
        }
        self.phase = DialogPhase::Closing;
        self.epoch = self.epoch.wrapping_add(1);
        Some(CloseTicket {
            epoch: self.epoch,
            delay_ms: CLOSE_DELAY_MS,
        })
    }

    /// A deferred notification came due. True when the ticket is still the
    /// current one; anything staler is dropped silently.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if self.phase == DialogPhase::Closing && ticket.epoch == self.epoch {
            self.phase = DialogPhase::Closed;
            true
        } else {
            false
        }
    }
}
