//! Site State
//!
//! Content and navigation handle shared with every component through Leptos
//! context. The content is immutable; the only reactive value, the current
//! view state, lives in the app root.

use std::rc::Rc;

use folio::registry::Portfolio;
use folio::route::Navigator;
use leptos::*;

use super::location::BrowserLocation;

/// Asset base baked in at build time (`FOLIO_ASSET_BASE=/sub/path/ trunk build`)
pub const ASSET_BASE: &str = match option_env!("FOLIO_ASSET_BASE") {
    Some(base) => base,
    None => "/",
};

/// Shared, read-only state of the site
#[derive(Clone)]
pub struct SiteState {
    pub portfolio: Rc<Portfolio>,
    pub navigator: Navigator<BrowserLocation>,
    /// Prefix for visual sources
    pub asset_base: &'static str,
}

/// Provide site state to the component tree
pub fn provide_site_state(portfolio: Portfolio, navigator: Navigator<BrowserLocation>) {
    provide_context(SiteState {
        portfolio: Rc::new(portfolio),
        navigator,
        asset_base: ASSET_BASE,
    });
}

/// Site state provided by the app root
pub fn use_site_state() -> SiteState {
    use_context::<SiteState>().expect("SiteState not found")
}
