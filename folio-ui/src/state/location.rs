//! Browser Location
//!
//! `window.location.hash` and `hashchange` events behind the router's
//! [`Location`] trait.

use std::cell::{Cell, RefCell};

use folio::route::{HashListener, ListenerId, Location};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

type HashChangeClosure = Closure<dyn FnMut(Event)>;

/// The browser window as a router location
pub struct BrowserLocation {
    window: Window,
    listeners: RefCell<Vec<(ListenerId, HashChangeClosure)>>,
    next_id: Cell<u64>,
}

impl BrowserLocation {
    /// `None` outside a browser window (e.g. in a worker)
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self {
            window,
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }
}

impl Location for BrowserLocation {
    fn hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn set_hash(&self, hash: &str) {
        if let Err(e) = self.window.location().set_hash(hash) {
            web_sys::console::error_1(&format!("Failed to set hash {:?}: {:?}", hash, e).into());
        }
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn subscribe(&self, listener: HashListener) -> ListenerId {
        let id = ListenerId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        // The browser fires hashchange after the URL has changed; read it back
        let location = self.window.location();
        let on_hash_change = Closure::wrap(Box::new(move |_: Event| {
            let hash = location.hash().unwrap_or_default();
            listener(&hash);
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) = self
            .window
            .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&format!("Failed to add hashchange listener: {:?}", e).into());
        }

        self.listeners.borrow_mut().push((id, on_hash_change));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(position) = listeners.iter().position(|(existing, _)| *existing == id) else {
            return;
        };

        let (_, on_hash_change) = listeners.remove(position);
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&format!("Failed to remove hashchange listener: {:?}", e).into());
        }
    }
}

impl Drop for BrowserLocation {
    fn drop(&mut self) {
        for (_, on_hash_change) in self.listeners.borrow_mut().drain(..) {
            let _ = self.window.remove_event_listener_with_callback(
                "hashchange",
                on_hash_change.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_subscribe_unsubscribe() {
        let location = BrowserLocation::new().unwrap();

        let first = location.subscribe(Rc::new(|_| {}));
        let second = location.subscribe(Rc::new(|_| {}));
        assert_ne!(first, second);
        assert_eq!(location.listeners.borrow().len(), 2);

        location.unsubscribe(first);
        location.unsubscribe(first);
        assert_eq!(location.listeners.borrow().len(), 1);
    }

    #[wasm_bindgen_test]
    fn test_set_hash_round_trip() {
        let location = BrowserLocation::new().unwrap();

        location.set_hash("#project/airbnb-berlin");
        assert_eq!(location.hash(), "#project/airbnb-berlin");

        location.set_hash("");
        assert_eq!(location.hash(), "");
    }

    #[wasm_bindgen_test]
    fn test_hashchange_reaches_listener() {
        let location = BrowserLocation::new().unwrap();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&seen);
        let id = location.subscribe(Rc::new(move |hash: &str| sink.borrow_mut().push(hash.to_string())));

        location.set_hash("#project/x");
        // The browser queues its own hashchange; dispatch one now to stay synchronous
        let event = Event::new("hashchange").unwrap();
        location.window.dispatch_event(&event).unwrap();

        assert_eq!(seen.borrow().first().map(String::as_str), Some("#project/x"));

        location.unsubscribe(id);
        location.set_hash("");
    }
}
