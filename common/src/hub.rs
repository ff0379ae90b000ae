//! Subscription registry for key events.
//!
//! The window layer owns one hub and dispatches every key transition into it.
//! A character subscribes when it mounts and unsubscribes when it unmounts.

use crate::input::{KeyBindings, KeyEvent, SharedInputState};

pub type KeyHandler = Box<dyn FnMut(&KeyEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct KeyEventHub {
    next_id: u64,
    handlers: Vec<(SubscriptionId, KeyHandler)>,
}

impl KeyEventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&KeyEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` if the subscription was already released.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub fn dispatch(&mut self, event: &KeyEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl std::fmt::Debug for KeyEventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyEventHub")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

/// Subscribe a handler that applies bound key events to `state`.
pub fn bind_input_state(
    hub: &mut KeyEventHub,
    state: SharedInputState,
    bindings: KeyBindings,
) -> SubscriptionId {
    hub.subscribe(move |event| {
        let recognized = state.update(|input| input.apply(event, &bindings));
        if !recognized {
            log::trace!("ignoring unbound key code '{}'", event.code);
        }
    })
}
