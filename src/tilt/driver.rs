//! TiltDriver - the per-target hover state machine
//!
//! Pure event-in, command-out logic: the host feeds it pointer events and
//! render ticks, it answers with what to write. All DOM work stays in the
//! binding layer, so every guarantee here is testable on the host.
//!
//! Invariants:
//! - at most one pending frame per target; a newer move overwrites it
//! - moves are ignored unless hovering, and dropped on degenerate bounds
//! - a settle timer from a previous leave never survives a re-enter

use crate::primitives::{PointerOffset, Rect};
use super::config::TiltConfig;
use super::shadow::TiltShadow;
use super::transform::TiltTransform;
use super::transition::{SETTLE_MS, TransitionPhase};

/// One coalesced render: transform and shadow written together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    pub transform: TiltTransform,
    pub shadow: TiltShadow,
}

impl TiltFrame {
    pub fn compute(offset: PointerOffset, config: &TiltConfig) -> Self {
        Self {
            transform: TiltTransform::compute(offset, config),
            shadow: TiltShadow::compute(offset),
        }
    }
}

/// What the host should do after feeding in a pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
    /// No frame was pending; schedule a render tick
    Scheduled,
    /// A pending frame was overwritten; the scheduled tick will pick
    /// up the newer values
    Coalesced,
    /// Not hovering, or degenerate bounds; nothing to render
    Skipped,
}

/// Everything the host writes on pointer-leave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaveAction {
    pub transition: TransitionPhase,
    pub transform: TiltTransform,
    /// Delay before the inline shadow may be cleared
    pub clear_shadow_after_ms: u32,
    /// Pass back to `shadow_clear_due` when the timer fires
    pub epoch: u32,
}

/// Per-target state: hover flag, the single pending frame slot, and a
/// settle epoch that invalidates stale shadow-clear timers.
#[derive(Debug)]
pub struct TiltDriver {
    config: TiltConfig,
    hovering: bool,
    pending: Option<TiltFrame>,
    epoch: u32,
}

impl TiltDriver {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            hovering: false,
            pending: None,
            epoch: 0,
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Pointer entered the target. Returns the transition to write.
    /// Bumping the epoch cancels any shadow-clear still in flight.
    pub fn pointer_enter(&mut self) -> TransitionPhase {
        self.hovering = true;
        self.epoch = self.epoch.wrapping_add(1);
        TransitionPhase::Tracking
    }

    /// Pointer moved; `rect` is the target's bounds read fresh from
    /// layout, `(x, y)` the pointer in the same coordinate space.
    pub fn pointer_move(&mut self, rect: Rect, x: f32, y: f32) -> MoveAction {
        if !self.hovering {
            return MoveAction::Skipped;
        }
        let Some(offset) = PointerOffset::from_pointer(&rect, x, y) else {
            return MoveAction::Skipped;
        };

        let frame = TiltFrame::compute(offset, &self.config);
        if self.pending.replace(frame).is_some() {
            MoveAction::Coalesced
        } else {
            MoveAction::Scheduled
        }
    }

    /// The render tick arrived: hand over the latest frame, if any.
    /// Consumes it, so each frame is written at most once.
    pub fn frame_tick(&mut self) -> Option<TiltFrame> {
        self.pending.take()
    }

    /// Pointer left the target. Discards any pending frame so an
    /// in-flight render cannot overwrite the neutral pose.
    pub fn pointer_leave(&mut self) -> LeaveAction {
        self.hovering = false;
        self.pending = None;
        LeaveAction {
            transition: TransitionPhase::Settling,
            transform: TiltTransform::NEUTRAL,
            clear_shadow_after_ms: SETTLE_MS,
            epoch: self.epoch,
        }
    }

    /// True if the shadow-clear timer started at `epoch` is still valid:
    /// the pointer has not re-entered since the leave that armed it.
    pub fn shadow_clear_due(&self, epoch: u32) -> bool {
        !self.hovering && epoch == self.epoch
    }
}
