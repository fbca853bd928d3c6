//! Project record types
//!
//! Every entity of a case study has its own struct with its required fields
//! spelled out. All structs reject unknown fields, so a misspelled key in the
//! content file fails at construction instead of rendering as a blank.

use serde::{Deserialize, Serialize};

/// One portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectRecord {
    /// Stable identifier used in the URL hash
    pub id: String,
    pub title: String,
    /// Start month, `YYYY-MM`
    pub date: String,
    pub duration: String,
    pub status: String,
    /// Summary card on the home page
    pub card: ProjectCard,
    pub problem: Problem,
    pub approach: Approach,
    pub solution: Solution,
    pub results: Results,
    pub learnings: Learnings,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub visuals: Vec<Visual>,
}

/// Home page summary of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectCard {
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    /// Overrides the default section heading
    #[serde(default)]
    pub heading: Option<String>,
    pub content: String,
    #[serde(default)]
    pub challenges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Approach {
    #[serde(default)]
    pub heading: Option<String>,
    pub dataset: String,
    /// Ordered steps
    #[serde(default)]
    pub methodology: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Solution {
    #[serde(default)]
    pub heading: Option<String>,
    pub content: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Results {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub insights: Vec<String>,
}

/// A headline number with an optional qualifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub delta: Option<String>,
}

impl Metric {
    /// Delta text, if present and non-blank
    pub fn delta(&self) -> Option<&str> {
        self.delta
            .as_deref()
            .map(str::trim)
            .filter(|delta| !delta.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Learnings {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub positives: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Named external links of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resources {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub notebook: Option<String>,
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default)]
    pub presentation: Option<String>,
}

impl Resources {
    /// Present links in display order; empty strings count as absent
    pub fn links(&self) -> Vec<ResourceLink<'_>> {
        [
            (ResourceKind::Repo, &self.repo),
            (ResourceKind::Notebook, &self.notebook),
            (ResourceKind::Report, &self.report),
            (ResourceKind::Presentation, &self.presentation),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| ResourceLink { kind, url })
        })
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Repo,
    Notebook,
    Report,
    Presentation,
}

impl ResourceKind {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Repo => "GitHub Repository",
            ResourceKind::Notebook => "Jupyter Notebook",
            ResourceKind::Report => "Final Report",
            ResourceKind::Presentation => "Präsentation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink<'a> {
    pub kind: ResourceKind,
    pub url: &'a str,
}

/// An image shown in the visuals gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Visual {
    pub title: String,
    pub kind: VisualKind,
    /// Opaque asset path, resolved against the asset base at render time
    pub src: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    Image,
    Chart,
    Diagram,
    Screenshot,
    Dashboard,
    Map,
    Heatmap,
    Treemap,
}

impl std::fmt::Display for VisualKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VisualKind::Image => "image",
            VisualKind::Chart => "chart",
            VisualKind::Diagram => "diagram",
            VisualKind::Screenshot => "screenshot",
            VisualKind::Dashboard => "dashboard",
            VisualKind::Map => "map",
            VisualKind::Heatmap => "heatmap",
            VisualKind::Treemap => "treemap",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_delta_blank_is_absent() {
        let metric = Metric {
            label: "RMSE".to_string(),
            value: "237.8".to_string(),
            delta: Some("  ".to_string()),
        };
        assert_eq!(metric.delta(), None);

        let metric = Metric {
            delta: Some("Robust".to_string()),
            ..metric
        };
        assert_eq!(metric.delta(), Some("Robust"));
    }

    #[test]
    fn test_resource_links_skip_empty() {
        let resources = Resources {
            repo: Some(String::new()),
            notebook: Some("/notebooks/a.ipynb".to_string()),
            report: None,
            presentation: Some("/slides.pdf".to_string()),
        };

        let links = resources.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].kind, ResourceKind::Notebook);
        assert_eq!(links[0].kind.label(), "Jupyter Notebook");
        assert_eq!(links[1].url, "/slides.pdf");
    }

    #[test]
    fn test_visual_kind_parse() {
        let visual: Visual = toml::from_str(
            r#"
            title = "Map"
            kind = "heatmap"
            src = "/img/map.png"
            "#,
        )
        .unwrap();
        assert_eq!(visual.kind, VisualKind::Heatmap);
        assert_eq!(visual.kind.to_string(), "heatmap");
        assert!(visual.description.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Metric, _> = toml::from_str(
            r#"
            label = "F1"
            value = "0.82"
            change = "Optimiert"
            "#,
        );
        assert!(result.is_err());
    }
}
