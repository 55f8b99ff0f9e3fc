//! Event notifications.
//!
//! State changes in the session are announced through an
//! [`EventNotifier`] so that animation, scoreboards, logging and
//! analytics react without the engine knowing about them.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use ladders::core::{PawnColor, Player, PlayerId};
//! use ladders::events::{EventKind, EventNotifier, GameEvent};
//!
//! let mut notifier = EventNotifier::new();
//! let winners = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&winners);
//! let subscription = notifier.subscribe(EventKind::GameFinish, move |event| {
//!     sink.borrow_mut().push(event.player().name.clone());
//! });
//!
//! let event = GameEvent::GameFinish {
//!     player_id: PlayerId::new(0),
//!     player: Player::new("Red", PawnColor::Red).at(100),
//! };
//! notifier.emit(&event);
//! assert_eq!(*winners.borrow(), vec!["Red".to_string()]);
//!
//! notifier.unsubscribe(subscription);
//! notifier.emit(&event);
//! assert_eq!(winners.borrow().len(), 1);
//! ```

mod event;
mod notifier;

pub use event::{EventKind, GameEvent};
pub use notifier::{EventNotifier, Listener, Subscription, SubscriptionId};
