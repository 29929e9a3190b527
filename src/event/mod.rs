//! Store events and the listeners they are broadcast to.

mod events;

use std::cell::{Cell, RefCell};
use std::fmt;

use log::warn;

pub use events::{StoreEvent, diff};

/// Receives every event the editor reports
pub trait EventHandler {
    fn handle_event(&mut self, event: &StoreEvent);
}

impl<F: FnMut(&StoreEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &StoreEvent) {
        self(event)
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Fans store events out to external listeners (autosave, thumbnails, tabs).
///
/// Listeners are called in subscription order. A listener must not emit on
/// the bus it is subscribed to; such events are dropped.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<(Subscription, Box<dyn EventHandler>)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl EventHandler + 'static) -> Subscription {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0 + 1);
        if let Ok(mut listeners) = self.listeners.try_borrow_mut() {
            listeners.push((id, Box::new(handler)));
        } else {
            warn!("Cannot subscribe while an event is being delivered");
        }
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let Ok(mut listeners) = self.listeners.try_borrow_mut() else {
            warn!("Cannot unsubscribe while an event is being delivered");
            return false;
        };
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    pub fn emit(&self, event: &StoreEvent) {
        let Ok(mut listeners) = self.listeners.try_borrow_mut() else {
            warn!("Dropped {:?} emitted from inside a listener", event);
            return;
        };
        for (_, listener) in listeners.iter_mut() {
            listener.handle_event(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.try_borrow().map_or(0, |listeners| listeners.len())
    }
}
