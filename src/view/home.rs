//! Home page view model

use crate::registry::{Portfolio, ProjectRecord, SiteContent};
use crate::route::{format_hash, parse_hash, ViewState};

/// An in-page section of the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAnchor {
    /// Element id the anchor scrolls to
    pub id: &'static str,
    pub label: &'static str,
}

impl NavAnchor {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Header navigation, in page order
pub const NAV_ANCHORS: [NavAnchor; 4] = [
    NavAnchor {
        id: "projects",
        label: "Projekte",
    },
    NavAnchor {
        id: "learning",
        label: "Lernfortschritte",
    },
    NavAnchor {
        id: "about",
        label: "Werdegang",
    },
    NavAnchor {
        id: "contact",
        label: "Kontakt",
    },
];

/// Element id of the hero section
pub const HERO_ANCHOR: &str = "home";

pub const STATIONS_HEADING: &str = "Stationen";
pub const SKILLS_HEADING: &str = "Tech‑Stack (Auswahl)";

/// Everything the home page renders
#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    pub site: &'a SiteContent,
    pub cards: Vec<CardView<'a>>,
}

/// A project summary card with its detail link
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub record: &'a ProjectRecord,
    pub href: String,
}

impl<'a> CardView<'a> {
    /// View state the card's button navigates to
    pub fn target(&self) -> ViewState {
        parse_hash(&self.href)
    }
}

/// A labelled external contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink<'a> {
    pub label: &'static str,
    pub url: &'a str,
}

impl<'a> HomeView<'a> {
    /// Build the home page from the portfolio, one card per project in
    /// registry order
    pub fn new(portfolio: &'a Portfolio) -> Self {
        let cards = portfolio
            .projects
            .iter()
            .map(|record| CardView {
                record,
                href: format_hash(&ViewState::project(record.id.as_str())),
            })
            .collect();

        Self {
            site: &portfolio.site,
            cards,
        }
    }

    /// Contact buttons in display order; missing links are left out
    pub fn contact_links(&self) -> Vec<ContactLink<'a>> {
        let profile = &self.site.profile;
        let links = &profile.links;

        [
            ("Email", profile.email.as_deref()),
            ("GitHub", links.github.as_deref()),
            ("Blog", links.medium.as_deref()),
            ("LinkedIn", links.linkedin.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| ContactLink { label, url })
        })
        .collect()
    }

    pub fn footer_line(&self, year: i32) -> String {
        format!(
            "© {} {}. Built as a lightweight static portfolio.",
            year, self.site.profile.name
        )
    }
}
