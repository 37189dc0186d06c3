use serde::{Deserialize, Serialize};

/// Cursor location in normalized percent-of-span chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Transition reported by the hover state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    /// The nearest point did not change; no re-formatting work is needed.
    Unchanged,
    /// A different point (or the first point) became highlighted.
    Entered(usize),
    /// The highlight was cleared.
    Cleared,
}

/// Transient highlight state of one chart instance.
///
/// States are `idle` and `highlighted(point)`. Pointer movement over the
/// same nearest point is a no-op transition so the caller can skip
/// redundant label formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HoverState {
    highlighted: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn highlighted(self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self.highlighted.is_none()
    }

    pub fn on_nearest(&mut self, point: usize) -> HoverTransition {
        if self.highlighted == Some(point) {
            return HoverTransition::Unchanged;
        }
        self.highlighted = Some(point);
        HoverTransition::Entered(point)
    }

    /// Clears the highlight. Idempotent.
    pub fn on_leave(&mut self) -> HoverTransition {
        if self.highlighted.take().is_some() {
            HoverTransition::Cleared
        } else {
            HoverTransition::Unchanged
        }
    }
}

/// Single-slot latest-wins queue for high-frequency pointer events.
///
/// The host submits every pointer-move; the layout side drains at most one
/// position per frame tick. A newer submission overwrites any pending one,
/// so work never queues up under fast mouse movement and a superseded
/// position is simply discarded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverCoalescer {
    pending: Option<CursorPosition>,
}

impl HoverCoalescer {
    pub fn submit(&mut self, cursor: CursorPosition) {
        self.pending = Some(cursor);
    }

    /// Drains the most recent pending position, if any.
    pub fn take(&mut self) -> Option<CursorPosition> {
        self.pending.take()
    }

    #[must_use]
    pub fn has_pending(self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Coalesces resize bursts to the final event after a quiet period.
///
/// Relayout cost scales with point and gridline count, so a full recompute
/// per intermediate resize event is wasted work. The debouncer is driven by
/// caller-supplied monotonic seconds, keeping it deterministic and free of
/// any timer dependency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDebouncer {
    quiet_period_seconds: f64,
    last_event_seconds: Option<f64>,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(quiet_period_seconds: f64) -> Self {
        Self {
            quiet_period_seconds: quiet_period_seconds.max(0.0),
            last_event_seconds: None,
        }
    }

    pub fn note_resize(&mut self, now_seconds: f64) {
        self.last_event_seconds = Some(now_seconds);
    }

    /// Returns `true` once the quiet period has elapsed since the last
    /// resize event, consuming the pending relayout request.
    pub fn poll(&mut self, now_seconds: f64) -> bool {
        match self.last_event_seconds {
            Some(last) if now_seconds - last >= self.quiet_period_seconds => {
                self.last_event_seconds = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn has_pending(self) -> bool {
        self.last_event_seconds.is_some()
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(0.1)
    }
}
