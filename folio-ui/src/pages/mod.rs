//! Pages
//!
//! Top-level page components, one per view state.

pub mod home;
pub mod project_detail;

pub use home::Home;
pub use project_detail::ProjectDetail;
