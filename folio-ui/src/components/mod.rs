//! UI Components
//!
//! Reusable Leptos components for the home and detail pages.

pub mod badge;
pub mod metric_card;
pub mod nav;
pub mod project_card;
pub mod section;
pub mod visual_card;

pub use badge::Badge;
pub use metric_card::MetricCard;
pub use nav::{BackButton, Nav};
pub use project_card::ProjectCard;
pub use section::{Card, Section};
pub use visual_card::VisualCard;
