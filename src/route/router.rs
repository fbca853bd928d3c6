//! View Router
//!
//! Derives the [`ViewState`] from a [`Location`] and keeps it in sync.
//!
//! # Lifecycle
//!
//! ```text
//! Router::new(location)     read hash once, compute initial state
//!        │
//!        ▼
//! router.mount(on_change)   scroll to top, subscribe to hash changes
//!        │
//!        ▼   (hash change)  recompute → scroll to top if changed → on_change
//!        │
//! drop(mounted)             unsubscribe
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use super::hash::{format_hash, parse_hash};
use super::location::{HashListener, ListenerId, Location};
use super::state::ViewState;

/// A router that has computed its initial state but is not yet listening
pub struct Router<L: Location> {
    location: Rc<L>,
    current: ViewState,
}

impl<L: Location + 'static> Router<L> {
    /// Create a router and derive the initial state from the current hash
    pub fn new(location: Rc<L>) -> Self {
        let hash = location.hash();
        let current = parse_hash(&hash);
        debug!(hash = %hash, state = %current, "Initial view state");

        Self { location, current }
    }

    /// Initial view state
    pub fn current(&self) -> &ViewState {
        &self.current
    }

    /// Start listening for hash changes
    ///
    /// `on_change` runs synchronously after every hash change with the
    /// recomputed state. The returned handle unsubscribes when dropped.
    pub fn mount<F>(self, on_change: F) -> MountedRouter<L>
    where
        F: Fn(&ViewState) + 'static,
    {
        let shared = Rc::new(Shared {
            location: self.location,
            current: RefCell::new(self.current),
            on_change: Box::new(on_change),
            recomputations: Cell::new(0),
        });

        // The page opens at the top of the document
        shared.location.scroll_to_top();

        // Weak: the location owns the listener, the listener must not own the router
        let weak: Weak<Shared<L>> = Rc::downgrade(&shared);
        let listener: HashListener = Rc::new(move |hash: &str| {
            if let Some(shared) = weak.upgrade() {
                shared.handle_hash_change(hash);
            }
        });
        let listener_id = shared.location.subscribe(listener);

        debug!(listener = listener_id.raw(), "Router mounted");

        MountedRouter {
            shared,
            listener_id,
        }
    }
}

struct Shared<L: Location> {
    location: Rc<L>,
    current: RefCell<ViewState>,
    on_change: Box<dyn Fn(&ViewState)>,
    recomputations: Cell<usize>,
}

impl<L: Location> Shared<L> {
    fn handle_hash_change(&self, hash: &str) {
        self.recomputations.set(self.recomputations.get() + 1);

        let next = parse_hash(hash);
        let changed = *self.current.borrow() != next;
        debug!(hash = %hash, state = %next, changed, "Hash changed");

        if changed {
            *self.current.borrow_mut() = next.clone();
            self.location.scroll_to_top();
        }

        (self.on_change)(&next);
    }
}

/// A router that is subscribed to hash changes
///
/// Dropping it removes the subscription.
pub struct MountedRouter<L: Location> {
    shared: Rc<Shared<L>>,
    listener_id: ListenerId,
}

impl<L: Location> MountedRouter<L> {
    /// Current view state
    pub fn current(&self) -> ViewState {
        self.shared.current.borrow().clone()
    }

    /// Number of hash changes this router has processed
    pub fn recomputations(&self) -> usize {
        self.shared.recomputations.get()
    }

    /// Handle for navigating by writing the hash
    pub fn navigator(&self) -> Navigator<L> {
        Navigator::new(Rc::clone(&self.shared.location))
    }

    /// Stop listening; equivalent to dropping the handle
    pub fn unmount(self) {}
}

impl<L: Location> Drop for MountedRouter<L> {
    fn drop(&mut self) {
        self.shared.location.unsubscribe(self.listener_id);
        debug!(listener = self.listener_id.raw(), "Router unmounted");
    }
}

/// Writes view states to the location as canonical hashes
///
/// Navigation only writes the hash; the mounted router observes the
/// resulting hash change and updates the view.
pub struct Navigator<L: Location> {
    location: Rc<L>,
}

impl<L: Location> Navigator<L> {
    pub fn new(location: Rc<L>) -> Self {
        Self { location }
    }

    /// Navigate to a view state
    pub fn go(&self, state: &ViewState) {
        self.location.set_hash(&format_hash(state));
    }

    /// Navigate to a project detail page
    ///
    /// An empty id has no detail hash and navigates home.
    pub fn project(&self, id: &str) {
        if id.is_empty() {
            self.home();
        } else {
            self.go(&ViewState::project(id));
        }
    }

    /// Clear the hash and return to the home view
    pub fn home(&self) {
        self.go(&ViewState::Home);
    }

    /// Anchor target for a view state
    pub fn href(&self, state: &ViewState) -> String {
        format_hash(state)
    }
}

impl<L: Location> Clone for Navigator<L> {
    fn clone(&self) -> Self {
        Self {
            location: Rc::clone(&self.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::location::MemoryLocation;

    fn recording_router(
        location: &Rc<MemoryLocation>,
    ) -> (MountedRouter<MemoryLocation>, Rc<RefCell<Vec<ViewState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mounted = Router::new(Rc::clone(location))
            .mount(move |state| sink.borrow_mut().push(state.clone()));
        (mounted, seen)
    }

    #[test]
    fn test_initial_state_from_hash() {
        let location = Rc::new(MemoryLocation::with_hash("#project/airbnb-berlin"));
        let router = Router::new(Rc::clone(&location));
        assert_eq!(router.current(), &ViewState::project("airbnb-berlin"));

        let location = Rc::new(MemoryLocation::new());
        let router = Router::new(location);
        assert_eq!(router.current(), &ViewState::Home);
    }

    #[test]
    fn test_mount_subscribes_and_scrolls() {
        let location = Rc::new(MemoryLocation::new());
        let (mounted, seen) = recording_router(&location);

        assert_eq!(location.listener_count(), 1);
        assert_eq!(location.scroll_resets(), 1);
        // Mounting does not count as a hash change
        assert!(seen.borrow().is_empty());
        assert_eq!(mounted.recomputations(), 0);
    }

    #[test]
    fn test_hash_change_recomputes_state() {
        let location = Rc::new(MemoryLocation::new());
        let (mounted, seen) = recording_router(&location);

        location.set_hash("project/telco-customer-churn");
        assert_eq!(mounted.current(), ViewState::project("telco-customer-churn"));

        location.set_hash("");
        assert_eq!(mounted.current(), ViewState::Home);

        assert_eq!(
            *seen.borrow(),
            vec![ViewState::project("telco-customer-churn"), ViewState::Home]
        );
    }

    #[test]
    fn test_scroll_reset_on_every_transition() {
        let location = Rc::new(MemoryLocation::new());
        let (_mounted, _) = recording_router(&location);
        assert_eq!(location.scroll_resets(), 1);

        // home -> detail
        location.set_hash("#project/a");
        assert_eq!(location.scroll_resets(), 2);

        // detail -> other detail
        location.set_hash("#project/b");
        assert_eq!(location.scroll_resets(), 3);

        // detail -> home
        location.set_hash("");
        assert_eq!(location.scroll_resets(), 4);
    }

    #[test]
    fn test_no_scroll_when_state_unchanged() {
        let location = Rc::new(MemoryLocation::new());
        let (mounted, seen) = recording_router(&location);

        // In-page anchors change the hash but stay on the home view
        location.set_hash("#projects");
        location.set_hash("#contact");

        assert_eq!(location.scroll_resets(), 1);
        assert_eq!(mounted.recomputations(), 2);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let location = Rc::new(MemoryLocation::new());
        let (mounted, seen) = recording_router(&location);
        drop(mounted);

        assert_eq!(location.listener_count(), 0);
        location.set_hash("#project/a");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_repeated_mounts_do_not_leak_listeners() {
        let location = Rc::new(MemoryLocation::new());

        for _ in 0..5 {
            let (mounted, _) = recording_router(&location);
            assert_eq!(location.listener_count(), 1);
            mounted.unmount();
        }
        assert_eq!(location.listener_count(), 0);

        let (mounted, seen) = recording_router(&location);
        location.set_hash("#project/a");
        assert_eq!(mounted.recomputations(), 1);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_navigator() {
        let location = Rc::new(MemoryLocation::new());
        let (mounted, _) = recording_router(&location);
        let nav = mounted.navigator();

        nav.project("global-power-plants");
        assert_eq!(location.hash(), "#project/global-power-plants");
        assert_eq!(mounted.current(), ViewState::project("global-power-plants"));

        nav.home();
        assert_eq!(location.hash(), "");
        assert_eq!(mounted.current(), ViewState::Home);

        assert_eq!(nav.href(&ViewState::project("x")), "#project/x");
        assert_eq!(nav.clone().href(&ViewState::Home), "");
    }

    #[test]
    fn test_navigator_empty_id_goes_home() {
        let location = Rc::new(MemoryLocation::with_hash("#project/airbnb-berlin"));
        let (mounted, _) = recording_router(&location);

        mounted.navigator().project("");
        assert_eq!(location.hash(), "");
        assert_eq!(mounted.current(), ViewState::Home);
    }

    #[test]
    fn test_round_trip_navigation() {
        let location = Rc::new(MemoryLocation::new());
        let (mounted, _) = recording_router(&location);

        location.set_hash("#project/turbine-maintenance");
        let first = mounted.current();
        location.set_hash("");
        location.set_hash("#project/turbine-maintenance");

        assert_eq!(mounted.current(), first);
    }
}
