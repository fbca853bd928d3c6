//! Hash Routing
//!
//! Client-side view selection driven by the URL hash fragment:
//!
//! - **state**: The `ViewState` selector (home or project detail)
//! - **hash**: Hash grammar (parse and format)
//! - **location**: The `Location` seam plus an in-memory implementation
//! - **router**: Subscription, recomputation and scroll reset
//!
//! # Hash Grammar
//!
//! ```text
//! ""                     -> Home
//! "#projects"            -> Home
//! "#project/"            -> Home
//! "#project/<id>"        -> Project { id }   (id is percent-decoded)
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio::route::{MemoryLocation, Router, ViewState};
//! use std::rc::Rc;
//!
//! let location = Rc::new(MemoryLocation::with_hash("#project/airbnb-berlin"));
//! let router = Router::new(Rc::clone(&location));
//! assert_eq!(router.current(), &ViewState::project("airbnb-berlin"));
//!
//! let mounted = router.mount(|state| println!("now showing {state}"));
//! mounted.navigator().home();
//! assert_eq!(mounted.current(), ViewState::Home);
//! ```

pub mod hash;
pub mod location;
pub mod router;
pub mod state;

pub use hash::{format_hash, parse_hash, PROJECT_PREFIX};
pub use location::{HashListener, ListenerId, Location, MemoryLocation};
pub use router::{MountedRouter, Navigator, Router};
pub use state::ViewState;
