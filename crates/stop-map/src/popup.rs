//! Per-marker popup interaction state machine.
//!
//! A marker's detail popup opens on hover, stays open while the pointer is
//! over either the marker or the popup body, and pins open on click until the
//! close control is used. Leaving marker or popup schedules a close after a
//! short debounce so the pointer can travel between the two without the popup
//! flickering shut.
//!
//! The machine owns no real timer. Every event carries the caller's clock
//! reading, leave events record a close deadline, and the host drives
//! [`PopupController::tick`] when its timer fires (or on any convenient
//! cadence). Dropping the controller discards the deadline with it, so an
//! unmounted marker can never observe a stale close.

use std::time::{Duration, Instant};

/// How long a scheduled close waits before taking effect.
pub const CLOSE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Visible state of one marker's popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    Closed,
    /// Open because the pointer is (or recently was) over marker or popup.
    OpenHover,
    /// Open by explicit click; immune to hover-leave closes.
    OpenPinned,
}

/// Pointer events forwarded by the map surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupEvent {
    MarkerEnter,
    MarkerLeave,
    /// Pointer entered the popup body itself.
    PopupEnter,
    PopupLeave,
    MarkerClick,
    /// The popup's explicit close control.
    CloseClick,
}

/// State machine instance for a single marker.
///
/// At most one close deadline is pending at a time; scheduling a new one
/// supersedes the old.
#[derive(Debug)]
pub struct PopupController {
    phase: PopupPhase,
    close_deadline: Option<Instant>,
}

impl PopupController {
    pub fn new() -> Self {
        Self {
            phase: PopupPhase::Closed,
            close_deadline: None,
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != PopupPhase::Closed
    }

    /// When the pending close (if any) becomes due. Hosts wiring a real timer
    /// re-arm it from this after every [`apply`](Self::apply).
    pub fn close_deadline(&self) -> Option<Instant> {
        self.close_deadline
    }

    /// Feed one pointer event, read from the caller's clock at `now`.
    pub fn apply(&mut self, event: PopupEvent, now: Instant) {
        match event {
            PopupEvent::MarkerEnter | PopupEvent::PopupEnter => {
                self.close_deadline = None;
                if self.phase == PopupPhase::Closed {
                    self.phase = PopupPhase::OpenHover;
                }
            }
            PopupEvent::MarkerLeave | PopupEvent::PopupLeave => {
                if self.phase == PopupPhase::OpenHover {
                    self.close_deadline = Some(now + CLOSE_DEBOUNCE);
                }
            }
            PopupEvent::MarkerClick => {
                self.close_deadline = None;
                self.phase = PopupPhase::OpenPinned;
            }
            PopupEvent::CloseClick => {
                if self.phase == PopupPhase::OpenPinned {
                    self.close_deadline = None;
                    self.phase = PopupPhase::Closed;
                }
            }
        }
    }

    /// Fire a due close. A deadline that outlived a pin (the marker was
    /// clicked while the close was pending) is discarded without effect.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.close_deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.close_deadline = None;
        if self.phase == PopupPhase::OpenHover {
            self.phase = PopupPhase::Closed;
        }
    }

    /// Drop any pending close without firing it (marker unmount).
    pub fn cancel_pending_close(&mut self) {
        self.close_deadline = None;
    }
}

impl Default for PopupController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_hover_opens_and_leave_closes_after_debounce() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerEnter, t0);
        assert_eq!(popup.phase(), PopupPhase::OpenHover);

        popup.apply(PopupEvent::MarkerLeave, at(t0, 10));
        assert_eq!(popup.phase(), PopupPhase::OpenHover);
        assert_eq!(popup.close_deadline(), Some(at(t0, 160)));

        // Not due yet.
        popup.tick(at(t0, 100));
        assert_eq!(popup.phase(), PopupPhase::OpenHover);

        popup.tick(at(t0, 210));
        assert_eq!(popup.phase(), PopupPhase::Closed);
        assert_eq!(popup.close_deadline(), None);
    }

    #[test]
    fn test_entering_popup_body_cancels_scheduled_close() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerEnter, t0);
        popup.apply(PopupEvent::MarkerLeave, at(t0, 20));
        // Pointer reaches the popup body 100 ms later, inside the debounce.
        popup.apply(PopupEvent::PopupEnter, at(t0, 120));
        assert_eq!(popup.close_deadline(), None);

        popup.tick(at(t0, 220));
        assert_eq!(popup.phase(), PopupPhase::OpenHover);
    }

    #[test]
    fn test_leaving_popup_body_schedules_close_like_marker_leave() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerEnter, t0);
        popup.apply(PopupEvent::PopupEnter, at(t0, 50));
        popup.apply(PopupEvent::PopupLeave, at(t0, 100));
        assert_eq!(popup.close_deadline(), Some(at(t0, 250)));

        popup.tick(at(t0, 250));
        assert_eq!(popup.phase(), PopupPhase::Closed);
    }

    #[test]
    fn test_reschedule_supersedes_previous_deadline() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerEnter, t0);
        popup.apply(PopupEvent::MarkerLeave, at(t0, 10));
        popup.apply(PopupEvent::MarkerEnter, at(t0, 50));
        popup.apply(PopupEvent::MarkerLeave, at(t0, 100));

        // Only the later deadline exists; the first one firing-point passes
        // without effect.
        assert_eq!(popup.close_deadline(), Some(at(t0, 250)));
        popup.tick(at(t0, 200));
        assert_eq!(popup.phase(), PopupPhase::OpenHover);
    }

    #[test]
    fn test_click_pins_through_hover_churn() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerClick, t0);
        assert_eq!(popup.phase(), PopupPhase::OpenPinned);

        popup.apply(PopupEvent::MarkerLeave, at(t0, 10));
        popup.apply(PopupEvent::PopupLeave, at(t0, 20));
        assert_eq!(popup.close_deadline(), None);

        popup.tick(at(t0, 500));
        assert_eq!(popup.phase(), PopupPhase::OpenPinned);
    }

    #[test]
    fn test_click_while_close_pending_discards_it() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerEnter, t0);
        popup.apply(PopupEvent::MarkerLeave, at(t0, 10));
        popup.apply(PopupEvent::MarkerClick, at(t0, 50));

        popup.tick(at(t0, 300));
        assert_eq!(popup.phase(), PopupPhase::OpenPinned);
    }

    #[test]
    fn test_close_control_closes_immediately() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerClick, t0);
        popup.apply(PopupEvent::CloseClick, at(t0, 10));
        assert_eq!(popup.phase(), PopupPhase::Closed);

        // Close control on an unpinned popup is a no-op.
        popup.apply(PopupEvent::MarkerEnter, at(t0, 20));
        popup.apply(PopupEvent::CloseClick, at(t0, 30));
        assert_eq!(popup.phase(), PopupPhase::OpenHover);
    }

    #[test]
    fn test_unmount_cancels_pending_close() {
        let t0 = Instant::now();
        let mut popup = PopupController::new();

        popup.apply(PopupEvent::MarkerEnter, t0);
        popup.apply(PopupEvent::MarkerLeave, at(t0, 10));
        popup.cancel_pending_close();

        popup.tick(at(t0, 500));
        assert_eq!(popup.phase(), PopupPhase::OpenHover);
        assert_eq!(popup.close_deadline(), None);
    }
}
