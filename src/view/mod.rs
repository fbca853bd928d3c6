//! View Models
//!
//! Platform-independent shapes of the two pages, shared by the web frontend
//! and the CLI text renderer:
//!
//! - **home**: Profile, project cards and contact links
//! - **detail**: Found or not-found project page with ordered sections
//! - **text**: Terminal rendering of a detail page
//! - **asset**: Resolution of visual sources against the asset base
//! - **labels**: Fixed UI copy
//!
//! [`Screen::for_state`] is the single place where a [`ViewState`] selects a
//! page.

pub mod asset;
pub mod detail;
pub mod home;
pub mod labels;
pub mod text;

pub use asset::resolve_asset;
pub use detail::{DetailView, Section, SectionKind};
pub use home::{CardView, ContactLink, HomeView, NavAnchor, NAV_ANCHORS};
pub use text::render_text;

use crate::registry::Portfolio;
use crate::route::ViewState;

/// The page selected by a view state
#[derive(Debug, Clone)]
pub enum Screen<'a> {
    Home(HomeView<'a>),
    Detail(DetailView<'a>),
}

impl<'a> Screen<'a> {
    pub fn for_state(state: &ViewState, portfolio: &'a Portfolio) -> Self {
        match state {
            ViewState::Home => Screen::Home(HomeView::new(portfolio)),
            ViewState::Project { id } => {
                Screen::Detail(DetailView::resolve(id, &portfolio.projects))
            }
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Screen::Home(home) => &home.site.profile.name,
            Screen::Detail(detail) => detail.title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_for_state() {
        let portfolio = Portfolio::embedded().unwrap();

        let screen = Screen::for_state(&ViewState::Home, &portfolio);
        assert!(matches!(screen, Screen::Home(ref home) if home.cards.len() == 5));

        let screen = Screen::for_state(&ViewState::project("global-power-plants"), &portfolio);
        assert_eq!(screen.title(), "Global Power Plants — Data Pipeline & Dashboard");

        let screen = Screen::for_state(&ViewState::project("nope"), &portfolio);
        assert_eq!(screen.title(), labels::NOT_FOUND_MESSAGE);
    }
}
