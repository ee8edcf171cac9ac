//! Typed controller events
//!
//! Observers subscribe to an [`EventKind`] and receive every
//! [`ControlEvent`] of that kind, in subscription order, on the thread
//! that emits it.

use std::collections::BTreeMap;
use std::fmt;

/// Screen-space pick location plus the "keep" modifier state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickEvent {
    pub x: f32,
    pub y: f32,
    /// True while the zoom modifier (Control) is held
    pub keep: bool,
}

/// Events emitted by the controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// The camera pose changed and the view should be redrawn
    Change,
    MouseDown,
    MouseUp,
    /// Short click
    Pick(PickEvent),
    /// Second press within the click timeout
    DblPick(PickEvent),
    /// A held double-click press was released
    UnDblPick,
}

impl ControlEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ControlEvent::Change => EventKind::Change,
            ControlEvent::MouseDown => EventKind::MouseDown,
            ControlEvent::MouseUp => EventKind::MouseUp,
            ControlEvent::Pick(_) => EventKind::Pick,
            ControlEvent::DblPick(_) => EventKind::DblPick,
            ControlEvent::UnDblPick => EventKind::UnDblPick,
        }
    }
}

/// Discriminant used for subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Change,
    MouseDown,
    MouseUp,
    Pick,
    DblPick,
    UnDblPick,
}

/// Subscriber ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Event handler function type
pub type EventHandler = Box<dyn FnMut(&ControlEvent)>;

/// Callback list keyed by event kind
pub struct EventDispatcher {
    handlers: BTreeMap<EventKind, Vec<(SubscriberId, EventHandler)>>,
    next_subscriber_id: u64,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
            next_subscriber_id: 1,
        }
    }

    /// Register `handler` for every event of `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriberId
    where
        F: FnMut(&ControlEvent) + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;

        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));

        id
    }

    /// Remove a subscription. Returns `false` if the ID was unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let mut removed = false;
        for handlers in self.handlers.values_mut() {
            let before = handlers.len();
            handlers.retain(|(sub_id, _)| *sub_id != id);
            removed |= handlers.len() != before;
        }
        removed
    }

    /// Deliver `event` to every subscriber of its kind.
    pub fn emit(&mut self, event: &ControlEvent) {
        if let Some(handlers) = self.handlers.get_mut(&event.kind()) {
            for (_, handler) in handlers.iter_mut() {
                handler(event);
            }
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<EventKind, usize> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| (*kind, handlers.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}
