//! Drag interaction state machine.
//!
//! A [`DragSession`] turns a stream of pointer positions into zone events:
//!
//! - `pick_up`: `Idle -> Dragging(None)`, or re-arms `Locked(z) -> Dragging(None)`
//! - `move_to`: while dragging, resolves the point and emits one exit/enter
//!   pair per change of hover zone, never one per tick
//! - `release`: `Dragging(Some(z)) -> Locked(z)` with a drop, or
//!   `Dragging(None) -> Idle` with a cancellation
//!
//! Committing the locked choice is left to the caller.
use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::zones::events::{DragEvent, DragEventKind, DragEventSink};
use crate::zones::geometry::ZoneRect;
use crate::zones::resolver::ZoneResolver;
use crate::zones::OutcomeId;

/// State of a [`DragSession`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        hover: Option<OutcomeId>,
    },
    Locked {
        zone: OutcomeId,
    },
}

/// Pointer-driven drag session over a set of zones.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
    resolver: ZoneResolver,
}

impl DragSession {
    pub fn new(resolver: ZoneResolver) -> Self {
        Self {
            state: DragState::Idle,
            resolver,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn resolver(&self) -> &ZoneResolver {
        &self.resolver
    }

    /// Replace the zone rectangles, typically after a layout pass. Takes
    /// effect on the next [`DragSession::move_to`].
    pub fn update_zones(&mut self, rects: Vec<ZoneRect>) {
        self.resolver.update(rects);
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Zone currently under the dragged point.
    pub fn hover(&self) -> Option<&OutcomeId> {
        match &self.state {
            DragState::Dragging { hover } => hover.as_ref(),
            _ => None,
        }
    }

    /// Zone of the last successful drop.
    pub fn locked(&self) -> Option<&OutcomeId> {
        match &self.state {
            DragState::Locked { zone } => Some(zone),
            _ => None,
        }
    }

    /// Return to `Idle`, discarding any hover or lock without emitting events.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn pick_up(&mut self) {
        self.pick_up_with_events(&mut ());
    }

    /// Start dragging. From `Locked` this re-arms the session and discards
    /// the lock. Ignored while already dragging.
    pub fn pick_up_with_events(&mut self, sink: &mut dyn DragEventSink) {
        let previous = match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Locked { zone } => {
                debug!("Re-arming drag session; discarding lock on '{}'.", zone);
                Some(zone)
            }
            dragging @ DragState::Dragging { .. } => {
                warn!("Pick-up while already dragging; ignored.");
                self.state = dragging;
                return;
            }
        };

        self.state = DragState::Dragging { hover: None };
        if sink.wants(DragEventKind::PickedUp) {
            sink.send(DragEvent::PickedUp { previous });
        }
    }

    pub fn move_to(&mut self, point: impl Into<Vec2>) -> bool {
        self.move_to_with_events(point, &mut ())
    }

    /// Track the dragged point. Returns whether the hover zone changed.
    ///
    /// Calling this repeatedly with the same point emits nothing after the
    /// first call. Ignored unless dragging.
    pub fn move_to_with_events(
        &mut self,
        point: impl Into<Vec2>,
        sink: &mut dyn DragEventSink,
    ) -> bool {
        let DragState::Dragging { hover } = &mut self.state else {
            trace!("Pointer move outside of a drag; ignored.");
            return false;
        };

        let next = self.resolver.resolve(point).cloned();
        if *hover == next {
            return false;
        }

        let previous = std::mem::replace(hover, next.clone());
        if let Some(zone) = previous {
            if sink.wants(DragEventKind::ZoneExit) {
                sink.send(DragEvent::ZoneExit { zone });
            }
        }
        if let Some(zone) = next {
            if sink.wants(DragEventKind::ZoneEnter) {
                sink.send(DragEvent::ZoneEnter { zone });
            }
        }
        true
    }

    pub fn release(&mut self) -> Option<OutcomeId> {
        self.release_with_events(&mut ())
    }

    /// Drop the dragged entity. Returns the locked zone, or `None` when the
    /// drop was cancelled or the session was not dragging.
    pub fn release_with_events(&mut self, sink: &mut dyn DragEventSink) -> Option<OutcomeId> {
        let hover = match std::mem::take(&mut self.state) {
            DragState::Dragging { hover } => hover,
            other => {
                debug!("Release without an active drag; ignored.");
                self.state = other;
                return None;
            }
        };

        match hover {
            Some(zone) => {
                self.state = DragState::Locked { zone: zone.clone() };
                if sink.wants(DragEventKind::ZoneDrop) {
                    sink.send(DragEvent::ZoneDrop { zone: zone.clone() });
                }
                Some(zone)
            }
            None => {
                if sink.wants(DragEventKind::Cancelled) {
                    sink.send(DragEvent::Cancelled);
                }
                None
            }
        }
    }
}
