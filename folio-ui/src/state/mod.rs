//! State Management
//!
//! Shared site content and the browser location.

pub mod location;
pub mod site;

pub use location::BrowserLocation;
pub use site::{provide_site_state, use_site_state, SiteState};
