//! Plain-text rendering of a detail page
//!
//! Produces the same sections, in the same order and with the same headings
//! as the web page, as markdown-style text for the terminal.

use std::fmt::Write;

use crate::registry::ProjectRecord;

use super::asset::resolve_asset;
use super::detail::{DetailView, SectionKind};
use super::labels::*;

/// Render a detail view as text
///
/// Visual sources are resolved against `asset_base`.
pub fn render_text(view: &DetailView<'_>, asset_base: &str) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = match view.record() {
        Some(record) => write_page(&mut out, view, record, asset_base),
        None => write_not_found(&mut out),
    };

    out
}

fn write_not_found(out: &mut String) -> std::fmt::Result {
    writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
    writeln!(out)?;
    writeln!(out, "← {}", BACK_LABEL)
}

fn write_page(
    out: &mut String,
    view: &DetailView<'_>,
    record: &ProjectRecord,
    asset_base: &str,
) -> std::fmt::Result {
    writeln!(out, "# {}", record.title)?;
    writeln!(out)?;
    writeln!(
        out,
        "{} · {}: {} · {}",
        record.status, DURATION_LABEL, record.duration, record.date
    )?;

    for section in view.sections() {
        writeln!(out)?;
        writeln!(out, "## {}", section.heading)?;
        writeln!(out)?;

        match section.kind {
            SectionKind::Problem => {
                writeln!(out, "{}", record.problem.content)?;
                write_list(out, CHALLENGES_LABEL, &record.problem.challenges)?;
            }
            SectionKind::Approach => {
                writeln!(out, "{}: {}", DATASET_LABEL, record.approach.dataset)?;
                if !record.approach.tools.is_empty() {
                    writeln!(out, "{}: {}", TOOLS_LABEL, record.approach.tools.join(", "))?;
                }
                if !record.approach.methodology.is_empty() {
                    writeln!(out)?;
                    writeln!(out, "{}", METHODOLOGY_LABEL)?;
                    for (n, step) in record.approach.methodology.iter().enumerate() {
                        writeln!(out, "{}. {}", n + 1, step)?;
                    }
                }
            }
            SectionKind::Solution => {
                writeln!(out, "{}", record.solution.content)?;
                write_list(out, FEATURES_LABEL, &record.solution.features)?;
            }
            SectionKind::Results => {
                for metric in &record.results.metrics {
                    match metric.delta() {
                        Some(delta) => {
                            writeln!(out, "- {}: {} ({})", metric.label, metric.value, delta)?
                        }
                        None => writeln!(out, "- {}: {}", metric.label, metric.value)?,
                    }
                }
                write_list(out, INSIGHTS_LABEL, &record.results.insights)?;
            }
            SectionKind::Visuals => {
                for visual in &record.visuals {
                    writeln!(
                        out,
                        "- {} [{}] {}",
                        visual.title,
                        visual.kind,
                        resolve_asset(asset_base, &visual.src)
                    )?;
                    if !visual.description.is_empty() {
                        writeln!(out, "  {}", visual.description)?;
                    }
                }
            }
            SectionKind::Learnings => {
                write_list(out, POSITIVES_LABEL, &record.learnings.positives)?;
                write_list(out, IMPROVEMENTS_LABEL, &record.learnings.improvements)?;
            }
            SectionKind::Resources => {
                for link in view.resource_links() {
                    writeln!(out, "- {}: {}", link.kind.label(), link.url)?;
                }
            }
        }
    }

    Ok(())
}

fn write_list(out: &mut String, label: &str, items: &[String]) -> std::fmt::Result {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", label)?;
    for item in items {
        writeln!(out, "- {}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Portfolio;

    #[test]
    fn test_render_found() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("telco-customer-churn", &portfolio.projects);
        let text = render_text(&view, "/");

        assert!(text.starts_with("# Telco Customer Churn — Classification\n"));
        assert!(text.contains("Abgeschlossen · Dauer: 3 Wochen · 2025-10"));
        assert!(text.contains("## Daten & Ansatz"));
        assert!(text.contains("1. Data Prep"));
        assert!(text.contains("- F1-Score: 0.82 (Optimiert)"));
        assert!(text.contains("/img/telco-churn/feature-importance.png"));
        assert!(text.contains("- GitHub Repository: https://github.com/SW-oasen/telco-customer-churn"));
    }

    #[test]
    fn test_render_sections_in_order() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("airbnb-berlin", &portfolio.projects);
        let text = render_text(&view, "/");

        let positions: Vec<_> = view
            .sections()
            .iter()
            .map(|s| text.find(&format!("## {}\n", s.heading)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_render_not_found() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("missing", &portfolio.projects);
        let text = render_text(&view, "/");

        assert!(text.starts_with(NOT_FOUND_MESSAGE));
        assert!(text.contains(BACK_LABEL));
    }

    #[test]
    fn test_render_uses_asset_base() {
        let portfolio = Portfolio::embedded().unwrap();
        let view = DetailView::resolve("airbnb-berlin", &portfolio.projects);
        let text = render_text(&view, "/portfolio/");

        assert!(text.contains("/portfolio/img/airbnb-eda-berlin/price-neighborhood-heatmap.png"));
    }
}
