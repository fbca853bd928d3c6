//! # Folio
//!
//! A personal portfolio site: a home page with project cards and one detail
//! page per data-science case study, selected by the URL hash fragment.
//!
//! ## Features
//!
//! - **Hash routing**: A single-grammar router behind a `Location` seam
//! - **Typed content**: Projects and profile parsed from embedded TOML,
//!   validated once before the first render
//! - **Shared view models**: The web frontend and the CLI render the same
//!   sections in the same order
//! - **Tooling**: Content validation CLI and a static preview server
//!
//! ## Modules
//!
//! - [`route`]: View state, hash grammar and router
//! - [`registry`]: Project registry and site content
//! - [`view`]: Home and detail view models
//! - [`config`]: Configuration for the command-line tools
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::registry::Portfolio;
//! use folio::route::{MemoryLocation, Router};
//! use folio::view::Screen;
//! use std::rc::Rc;
//!
//! let portfolio = Portfolio::embedded().unwrap();
//! let location = Rc::new(MemoryLocation::with_hash("#project/telco-customer-churn"));
//!
//! let mounted = Router::new(location).mount(|_| {});
//! let screen = Screen::for_state(&mounted.current(), &portfolio);
//! assert_eq!(screen.title(), "Telco Customer Churn — Classification");
//!
//! mounted.navigator().home();
//! assert!(mounted.current().is_home());
//! ```

pub mod config;
pub mod registry;
pub mod route;
pub mod view;

#[cfg(feature = "server")]
pub mod serve;
#[cfg(feature = "cli")]
pub mod telemetry;

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, ServeConfig, SiteConfig};

pub use registry::{Portfolio, ProjectRecord, Registry, RegistryError, RegistryResult, SiteContent};

pub use route::{
    format_hash, parse_hash, Location, MemoryLocation, MountedRouter, Navigator, Router, ViewState,
};

pub use view::{render_text, resolve_asset, DetailView, HomeView, Screen};

#[cfg(feature = "server")]
pub use serve::{build_router, serve, ServeError};
