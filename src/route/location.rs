//! Location Seam
//!
//! The router never touches a browser directly. It talks to a [`Location`],
//! which the frontend implements on top of `window` and which
//! [`MemoryLocation`] implements in-process for tests and tooling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked with the new hash after every hash change
pub type HashListener = Rc<dyn Fn(&str)>;

/// Handle for removing a hash-change listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Hosting environment of the router
///
/// All methods take `&self`; implementations use interior mutability, the
/// same way browser APIs behave.
pub trait Location {
    /// Current hash, including the leading `#`, or empty
    fn hash(&self) -> String;

    /// Replace the hash; fires hash-change listeners if the value changed
    fn set_hash(&self, hash: &str);

    /// Reset the document scroll position to the top
    fn scroll_to_top(&self);

    /// Register a hash-change listener
    fn subscribe(&self, listener: HashListener) -> ListenerId;

    /// Remove a listener; unknown ids are ignored
    fn unsubscribe(&self, id: ListenerId);
}

/// In-memory location with browser-like hash semantics
///
/// - Hashes are normalized to `""` or `"#<fragment>"`
/// - Setting the current hash again fires nothing
/// - Listeners run synchronously, in subscription order
#[derive(Default)]
pub struct MemoryLocation {
    hash: RefCell<String>,
    listeners: RefCell<Vec<(ListenerId, HashListener)>>,
    next_id: Cell<u64>,
    scroll_resets: Cell<usize>,
}

impl MemoryLocation {
    /// Create a location with an empty hash
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location that starts at the given hash
    pub fn with_hash(hash: &str) -> Self {
        let location = Self::default();
        *location.hash.borrow_mut() = normalize_hash(hash);
        location
    }

    /// Number of live hash-change listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Number of times the scroll position was reset
    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets.get()
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn set_hash(&self, hash: &str) {
        let hash = normalize_hash(hash);
        if *self.hash.borrow() == hash {
            return;
        }
        *self.hash.borrow_mut() = hash.clone();

        // Snapshot so listeners may (un)subscribe or navigate while running
        let listeners: Vec<HashListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&hash);
        }
    }

    fn scroll_to_top(&self) {
        self.scroll_resets.set(self.scroll_resets.get() + 1);
    }

    fn subscribe(&self, listener: HashListener) -> ListenerId {
        let id = ListenerId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }
}

/// Browser form of a hash: empty, or `#` followed by a non-empty fragment
fn normalize_hash(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        String::new()
    } else {
        format!("#{}", fragment)
    }
}
