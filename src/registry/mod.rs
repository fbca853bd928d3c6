//! Portfolio Content
//!
//! Static, typed content of the site:
//!
//! - **types**: Project records and their sections
//! - **site**: Profile and other home page content
//! - **store**: The `Registry` keyed by project id
//! - **error**: Construction errors
//!
//! Content lives in two TOML documents under `content/` that are compiled
//! into the crate. [`Portfolio::embedded`] parses both once; the result is
//! passed explicitly to whatever renders it.
//!
//! ```rust
//! use folio::registry::Portfolio;
//!
//! let portfolio = Portfolio::embedded().unwrap();
//! let project = portfolio.projects.get("telco-customer-churn").unwrap();
//! assert_eq!(project.status, "Abgeschlossen");
//! ```

pub mod error;
pub mod site;
pub mod store;
pub mod types;

pub use error::{RegistryError, RegistryResult};
pub use site::{LearningEntry, Profile, ProfileLinks, SiteContent, Station};
pub use store::Registry;
pub use types::{
    Approach, Learnings, Metric, Problem, ProjectCard, ProjectRecord, ResourceKind,
    ResourceLink, Resources, Results, Solution, Visual, VisualKind,
};

use std::path::Path;

/// Compiled-in home page document
pub const EMBEDDED_SITE: &str = include_str!("../../content/site.toml");

/// Compiled-in projects document
pub const EMBEDDED_PROJECTS: &str = include_str!("../../content/projects.toml");

/// Site content plus the project registry
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub site: SiteContent,
    pub projects: Registry,
}

impl Portfolio {
    /// Parse both documents
    pub fn from_toml(site: &str, projects: &str) -> RegistryResult<Self> {
        Self::from_named_toml((site, "site.toml"), (projects, "projects.toml"))
    }

    /// Build from the compiled-in documents
    pub fn embedded() -> RegistryResult<Self> {
        Self::from_toml(EMBEDDED_SITE, EMBEDDED_PROJECTS)
    }

    /// Build from files on disk, falling back to the embedded document for
    /// any path that is not given
    pub fn load(site: Option<&Path>, projects: Option<&Path>) -> RegistryResult<Self> {
        let site_doc = read_or_embedded(site, EMBEDDED_SITE)?;
        let projects_doc = read_or_embedded(projects, EMBEDDED_PROJECTS)?;

        Self::from_named_toml(
            (&site_doc, &document_name(site, "site.toml")),
            (&projects_doc, &document_name(projects, "projects.toml")),
        )
    }

    fn from_named_toml(site: (&str, &str), projects: (&str, &str)) -> RegistryResult<Self> {
        let portfolio = Self {
            site: SiteContent::from_toml_str(site.0, site.1)?,
            projects: Registry::from_toml_str(projects.0, projects.1)?,
        };

        tracing::info!(
            projects = portfolio.projects.len(),
            learning = portfolio.site.learning.len(),
            "Portfolio content loaded"
        );

        Ok(portfolio)
    }
}

fn read_or_embedded(path: Option<&Path>, embedded: &str) -> RegistryResult<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
        None => Ok(embedded.to_string()),
    }
}

fn document_name(path: Option<&Path>, embedded: &str) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => embedded.to_string(),
    }
}
