//! Project detail view model

use crate::registry::{ProjectRecord, Registry, ResourceLink};
use crate::route::{format_hash, ViewState};

use super::labels::NOT_FOUND_MESSAGE;

/// Outcome of looking up a project id
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    Found(&'a ProjectRecord),
    NotFound { id: String },
}

impl<'a> DetailView<'a> {
    /// Look up `id` by exact match
    pub fn resolve(id: &str, registry: &'a Registry) -> Self {
        match registry.get(id) {
            Some(record) => DetailView::Found(record),
            None => {
                tracing::debug!(id, "Project not found");
                DetailView::NotFound { id: id.to_string() }
            }
        }
    }

    pub fn record(&self) -> Option<&'a ProjectRecord> {
        match self {
            DetailView::Found(record) => Some(record),
            DetailView::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailView::Found(_))
    }

    /// Page title; the not-found message when the lookup failed
    pub fn title(&self) -> &str {
        match self {
            DetailView::Found(record) => &record.title,
            DetailView::NotFound { .. } => NOT_FOUND_MESSAGE,
        }
    }

    /// The seven sections in page order, with headings resolved
    ///
    /// Empty when the project was not found.
    pub fn sections(&self) -> Vec<Section<'a>> {
        let Some(record) = self.record() else {
            return Vec::new();
        };

        SectionKind::ALL
            .iter()
            .map(|&kind| Section {
                kind,
                heading: heading_override(record, kind).unwrap_or(kind.default_heading()),
            })
            .collect()
    }

    /// Present resource links in display order
    pub fn resource_links(&self) -> Vec<ResourceLink<'a>> {
        self.record()
            .map(|record| record.resources.links())
            .unwrap_or_default()
    }

    /// Target of the back affordance
    pub fn back_href() -> String {
        format_hash(&ViewState::Home)
    }
}

/// A themed block of the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Problem,
    Approach,
    Solution,
    Results,
    Visuals,
    Learnings,
    Resources,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Problem,
        SectionKind::Approach,
        SectionKind::Solution,
        SectionKind::Results,
        SectionKind::Visuals,
        SectionKind::Learnings,
        SectionKind::Resources,
    ];

    pub fn default_heading(&self) -> &'static str {
        match self {
            SectionKind::Problem => "Problem",
            SectionKind::Approach => "Daten & Ansatz",
            SectionKind::Solution => "Lösung",
            SectionKind::Results => "Ergebnisse",
            SectionKind::Visuals => "Visualisierungen",
            SectionKind::Learnings => "Learnings & Reflexion",
            SectionKind::Resources => "Code & Resources",
        }
    }

    /// Element id of the section on the page
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionKind::Problem => "problem",
            SectionKind::Approach => "approach",
            SectionKind::Solution => "solution",
            SectionKind::Results => "results",
            SectionKind::Visuals => "visuals",
            SectionKind::Learnings => "learnings",
            SectionKind::Resources => "resources",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub heading: &'a str,
}

fn heading_override(record: &ProjectRecord, kind: SectionKind) -> Option<&str> {
    let heading = match kind {
        SectionKind::Problem => &record.problem.heading,
        SectionKind::Approach => &record.approach.heading,
        SectionKind::Solution => &record.solution.heading,
        SectionKind::Results => &record.results.heading,
        SectionKind::Learnings => &record.learnings.heading,
        SectionKind::Visuals | SectionKind::Resources => return None,
    };

    heading
        .as_deref()
        .map(str::trim)
        .filter(|heading| !heading.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Portfolio, ResourceKind};

    #[test]
    fn test_resolve_found() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("airbnb-berlin", &portfolio.projects);

        assert!(view.is_found());
        assert_eq!(view.title(), "Airbnb Berlin — Exploratory Data Analysis");
    }

    #[test]
    fn test_resolve_not_found() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("does-not-exist", &portfolio.projects);

        assert_eq!(
            view,
            DetailView::NotFound {
                id: "does-not-exist".to_string()
            }
        );
        assert_eq!(view.title(), NOT_FOUND_MESSAGE);
        assert!(view.sections().is_empty());
        assert!(view.resource_links().is_empty());
        assert!(view.record().is_none());
    }

    #[test]
    fn test_sections_default_headings() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("telco-customer-churn", &portfolio.projects);

        let headings: Vec<_> = view.sections().iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec![
                "Problem",
                "Daten & Ansatz",
                "Lösung",
                "Ergebnisse",
                "Visualisierungen",
                "Learnings & Reflexion",
                "Code & Resources",
            ]
        );
    }

    #[test]
    fn test_sections_heading_override() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("turbine-maintenance", &portfolio.projects);
        let sections = view.sections();

        let heading = |kind| {
            sections
                .iter()
                .find(|s| s.kind == kind)
                .map(|s| s.heading)
                .unwrap()
        };
        assert_eq!(heading(SectionKind::Problem), "Problem");
        assert_eq!(heading(SectionKind::Solution), "Lösung (Work in Progress)");
        assert_eq!(heading(SectionKind::Results), "Ergebnisse (Zwischenstand)");
        assert_eq!(
            heading(SectionKind::Learnings),
            "Learnings & Reflexion (Zwischenstand)"
        );
    }

    #[test]
    fn test_resource_links() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("airbnb-berlin", &portfolio.projects);

        let kinds: Vec<_> = view.resource_links().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Repo,
                ResourceKind::Notebook,
                ResourceKind::Report,
                ResourceKind::Presentation,
            ]
        );
    }

    #[test]
    fn test_anchors_unique() {
        let anchors: std::collections::HashSet<_> =
            SectionKind::ALL.iter().map(|k| k.anchor()).collect();
        assert_eq!(anchors.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_back_href_is_home() {
        assert_eq!(DetailView::back_href(), "");
        assert_eq!(crate::route::parse_hash(&DetailView::back_href()), ViewState::Home);
    }
}
