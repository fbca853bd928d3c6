//! View state selector

use serde::{Deserialize, Serialize};

use super::hash::{format_hash, parse_hash};

/// Which top-level view the page shows
///
/// Derived from the URL hash; the router is its only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewState {
    /// Profile and project list
    #[default]
    Home,
    /// Detail page for one project, which may or may not exist
    Project { id: String },
}

impl ViewState {
    /// Create a project detail state
    ///
    /// An empty id formats to `#project/`, which parses back as
    /// [`ViewState::Home`].
    pub fn project(id: impl Into<String>) -> Self {
        ViewState::Project { id: id.into() }
    }

    /// Parse a hash fragment (leading `#` optional)
    pub fn from_hash(hash: &str) -> Self {
        parse_hash(hash)
    }

    /// Canonical hash for this state
    pub fn to_hash(&self) -> String {
        format_hash(self)
    }

    pub fn is_home(&self) -> bool {
        matches!(self, ViewState::Home)
    }

    /// Project identifier, if this is a detail state
    pub fn project_id(&self) -> Option<&str> {
        match self {
            ViewState::Home => None,
            ViewState::Project { id } => Some(id),
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::Home => write!(f, "home"),
            ViewState::Project { id } => write!(f, "project/{}", id),
        }
    }
}
