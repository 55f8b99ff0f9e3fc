//! Event notifier.
//!
//! Listeners are indexed by event kind and invoked in registration order.
//! Registration returns a `Subscription` token; removing by token drops
//! exactly that registration, even when the same closure was registered
//! twice.
//!
//! ## Emission
//!
//! `emit` snapshots the listener list before invoking anything, so a
//! listener registered or removed while an emission runs takes effect
//! from the next emission on. A panicking listener propagates out of
//! `emit` and the remaining listeners for that emission do not run.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{EventKind, GameEvent};

/// Listener callback.
pub type Listener = Rc<dyn Fn(&GameEvent)>;

/// Unique identifier for a registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Token returned by `subscribe`. Hand it back to `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "dropping the token makes the listener impossible to remove"]
pub struct Subscription {
    /// Event kind the listener is registered for.
    pub kind: EventKind,
    /// Registration ID.
    pub id: SubscriptionId,
}

/// Pub/sub registry for game events.
#[derive(Clone, Default)]
pub struct EventNotifier {
    /// Listeners by event kind, in registration order.
    listeners: FxHashMap<EventKind, SmallVec<[(SubscriptionId, Listener); 4]>>,

    /// Next registration ID to allocate.
    next_id: u32,
}

impl EventNotifier {
    /// Create a notifier with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `kind`.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        listener: impl Fn(&GameEvent) + 'static,
    ) -> Subscription {
        self.subscribe_rc(kind, Rc::new(listener))
    }

    /// Register a shared listener for `kind`.
    pub fn subscribe_rc(&mut self, kind: EventKind, listener: Listener) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.listeners.entry(kind).or_default().push((id, listener));
        tracing::trace!(event = %kind, subscription = %id, "listener added");

        Subscription { kind, id }
    }

    /// Remove one registration.
    ///
    /// Returns false if the token was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let Some(list) = self.listeners.get_mut(&subscription.kind) else {
            return false;
        };

        let before = list.len();
        list.retain(|(id, _)| *id != subscription.id);
        let removed = list.len() != before;

        if list.is_empty() {
            self.listeners.remove(&subscription.kind);
        }
        if removed {
            tracing::trace!(
                event = %subscription.kind,
                subscription = %subscription.id,
                "listener removed"
            );
        }

        removed
    }

    /// Invoke every listener registered for the event's kind.
    ///
    /// Returns the number of listeners invoked.
    pub fn emit(&self, event: &GameEvent) -> usize {
        let kind = event.kind();
        let snapshot: SmallVec<[Listener; 4]> = self
            .listeners
            .get(&kind)
            .map(|list| list.iter().map(|(_, l)| Rc::clone(l)).collect())
            .unwrap_or_default();

        tracing::debug!(event = %kind, listeners = snapshot.len(), "emit");

        for listener in &snapshot {
            listener(event);
        }

        snapshot.len()
    }

    /// Number of listeners registered for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, |list| list.len())
    }

    /// Is `subscription` still registered?
    #[must_use]
    pub fn is_subscribed(&self, subscription: Subscription) -> bool {
        self.listeners
            .get(&subscription.kind)
            .is_some_and(|list| list.iter().any(|(id, _)| *id == subscription.id))
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl std::fmt::Debug for EventNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventNotifier")
            .field("player_killed", &self.listener_count(EventKind::PlayerKilled))
            .field("game_finish", &self.listener_count(EventKind::GameFinish))
            .field("next_id", &self.next_id)
            .finish()
    }
}
