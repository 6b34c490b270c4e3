//! Event types and sinks for observing drag sessions.
//!
//! [`crate::zones::drag::DragSession`] reports every state transition as a
//! [`DragEvent`] sent to a [`DragEventSink`]. Sinks can collect, forward, or
//! fan out events; `()` discards them.
use crate::zones::OutcomeId;

/// Describes events emitted by a drag session.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEvent {
    /// An entity was picked up. `previous` holds the lock this pick-up discarded.
    PickedUp { previous: Option<OutcomeId> },

    /// The dragged point entered a zone.
    ZoneEnter { zone: OutcomeId },

    /// The dragged point left a zone.
    ZoneExit { zone: OutcomeId },

    /// The entity was released over a zone, which is now locked.
    ZoneDrop { zone: OutcomeId },

    /// The entity was released outside every zone.
    Cancelled,
}

impl DragEvent {
    pub fn kind(&self) -> DragEventKind {
        match self {
            DragEvent::PickedUp { .. } => DragEventKind::PickedUp,
            DragEvent::ZoneEnter { .. } => DragEventKind::ZoneEnter,
            DragEvent::ZoneExit { .. } => DragEventKind::ZoneExit,
            DragEvent::ZoneDrop { .. } => DragEventKind::ZoneDrop,
            DragEvent::Cancelled => DragEventKind::Cancelled,
        }
    }

    /// Zone the event refers to, if any.
    pub fn zone(&self) -> Option<&OutcomeId> {
        match self {
            DragEvent::ZoneEnter { zone }
            | DragEvent::ZoneExit { zone }
            | DragEvent::ZoneDrop { zone } => Some(zone),
            DragEvent::PickedUp { .. } | DragEvent::Cancelled => None,
        }
    }
}

/// Discriminant of [`DragEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    PickedUp,
    ZoneEnter,
    ZoneExit,
    ZoneDrop,
    Cancelled,
}

/// A generic event sink that accepts [`DragEvent`]s.
pub trait DragEventSink {
    fn send(&mut self, event: DragEvent);

    /// Whether the sink cares about events of `kind`. Events it does not want
    /// are never constructed.
    #[inline]
    fn wants(&self, _kind: DragEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl DragEventSink for () {
    #[inline]
    fn send(&mut self, _event: DragEvent) {}

    #[inline]
    fn wants(&self, _kind: DragEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(DragEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(DragEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> DragEventSink for FnSink<F>
where
    F: FnMut(DragEvent),
{
    #[inline]
    fn send(&mut self, event: DragEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Debug, Default)]
pub struct VecSink {
    events: Vec<DragEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<DragEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[DragEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl DragEventSink for VecSink {
    #[inline]
    fn send(&mut self, event: DragEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: DragEventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: DragEventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn sinks(&self) -> &[S] {
        &self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: DragEventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DragEventSink> DragEventSink for MultiSink<S> {
    fn send(&mut self, event: DragEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: DragEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(zone: &str) -> DragEvent {
        DragEvent::ZoneEnter { zone: zone.into() }
    }

    #[test]
    fn kind_and_zone_accessors() {
        assert_eq!(enter("a").kind(), DragEventKind::ZoneEnter);
        assert_eq!(enter("a").zone().map(String::as_str), Some("a"));
        assert_eq!(DragEvent::Cancelled.zone(), None);
        assert_eq!(
            DragEvent::PickedUp { previous: None }.kind(),
            DragEventKind::PickedUp
        );
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!DragEventSink::wants(&(), DragEventKind::ZoneDrop));
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(enter("a"));
        sink.send(DragEvent::Cancelled);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.into_inner()[1], DragEvent::Cancelled);
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(enter("b"));
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks()[0].as_slice(), &[enter("b")]);
        assert_eq!(multi.sinks()[1].as_slice(), &[enter("b")]);
    }

    #[test]
    fn multi_sink_skips_sinks_that_opt_out() {
        let mut multi = MultiSink::with_sinks(vec![()]);
        assert!(!multi.wants(DragEventKind::ZoneEnter));
        multi.send(enter("a"));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut drops = Vec::new();
        {
            let mut sink = FnSink::new(|event: DragEvent| {
                if let DragEvent::ZoneDrop { zone } = event {
                    drops.push(zone);
                }
            });
            sink.send(DragEvent::ZoneDrop { zone: "a".into() });
            sink.send(DragEvent::Cancelled);
        }
        assert_eq!(drops, vec!["a".to_string()]);
    }
}
