//! Project Detail Page
//!
//! One case study: problem, approach, solution, results, visuals, learnings
//! and resources, in that order. Unknown ids show the not-found message.

use folio::registry::ProjectRecord;
use folio::view::{labels::*, DetailView, SectionKind};
use leptos::*;

use crate::components::{BackButton, Badge, Card, MetricCard, Section, VisualCard};
use crate::state::use_site_state;

/// Project detail page component
#[component]
pub fn ProjectDetail(
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let state = use_site_state();
    let detail = DetailView::resolve(&id, &state.portfolio.projects);

    let Some(record) = detail.record().cloned() else {
        return view! { <NotFound /> }.into_view();
    };

    let links: Vec<(&'static str, String)> = detail
        .resource_links()
        .into_iter()
        .map(|link| (link.kind.label(), link.url.to_string()))
        .collect();

    let sections = detail
        .sections()
        .into_iter()
        .map(|section| {
            let body = section_body(section.kind, &record, &links, state.asset_base);
            view! {
                <Section id=section.kind.anchor() heading=section.heading.to_string()>
                    {body}
                </Section>
            }
        })
        .collect_view();

    view! {
        <header class="sticky top-0 z-10 backdrop-blur bg-white/70 border-b">
            <div class="max-w-6xl mx-auto flex items-center justify-between px-4 md:px-6 h-16">
                <BackButton />
                <div class="flex items-center gap-4">
                    <Badge label=record.status.clone() />
                    <span class="text-sm text-muted">{record.date.clone()}</span>
                </div>
            </div>
        </header>

        <div class="max-w-6xl mx-auto px-4 md:px-6 py-12">
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-6xl font-extrabold tracking-tight mb-4">
                    {record.title.clone()}
                </h1>
                <div class="flex justify-center gap-6 text-sm text-muted">
                    <span>{format!("{}: {}", DURATION_LABEL, record.duration)}</span>
                    <span>"•"</span>
                    <span>{record.date.clone()}</span>
                </div>
            </div>
        </div>

        {sections}
    }
    .into_view()
}

fn section_body(
    kind: SectionKind,
    record: &ProjectRecord,
    links: &[(&'static str, String)],
    asset_base: &'static str,
) -> View {
    match kind {
        SectionKind::Problem => {
            let content = record.problem.content.clone();
            let challenges = record.problem.challenges.clone();
            view! {
                <Card>
                    <p class="text-lg mb-6">{content}</p>
                    <ItemList label=CHALLENGES_LABEL items=challenges />
                </Card>
            }
            .into_view()
        }
        SectionKind::Approach => {
            let dataset = record.approach.dataset.clone();
            let tools = record
                .approach
                .tools
                .iter()
                .map(|tool| view! { <Badge label=tool.clone() /> })
                .collect_view();
            let steps = record
                .approach
                .methodology
                .iter()
                .enumerate()
                .map(|(n, step)| view! {
                    <li class="flex items-start gap-3">
                        <span class="bg-primary text-white w-6 h-6 rounded-full flex items-center justify-center text-sm font-medium">
                            {n + 1}
                        </span>
                        <span>{step.clone()}</span>
                    </li>
                })
                .collect_view();
            view! {
                <div class="grid md:grid-cols-2 gap-6">
                    <Card title=DATASET_LABEL>
                        <p class="font-medium">{dataset}</p>
                    </Card>
                    <Card title=TOOLS_LABEL>
                        <div class="flex flex-wrap gap-2">{tools}</div>
                    </Card>
                </div>
                <div class="mt-6">
                    <Card title=METHODOLOGY_LABEL>
                        <ol class="space-y-2">{steps}</ol>
                    </Card>
                </div>
            }
            .into_view()
        }
        SectionKind::Solution => {
            let content = record.solution.content.clone();
            let features = record.solution.features.clone();
            view! {
                <Card>
                    <p class="text-lg mb-6">{content}</p>
                    <ItemList label=FEATURES_LABEL items=features />
                </Card>
            }
            .into_view()
        }
        SectionKind::Results => {
            let metrics = record
                .results
                .metrics
                .iter()
                .map(|metric| view! { <MetricCard metric=metric.clone() /> })
                .collect_view();
            let insights = record.results.insights.clone();
            view! {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">{metrics}</div>
                <Card>
                    <ItemList label=INSIGHTS_LABEL items=insights />
                </Card>
            }
            .into_view()
        }
        SectionKind::Visuals => {
            let visuals = record
                .visuals
                .iter()
                .map(|visual| view! { <VisualCard visual=visual.clone() asset_base=asset_base /> })
                .collect_view();
            view! { <div class="grid md:grid-cols-3 gap-6">{visuals}</div> }.into_view()
        }
        SectionKind::Learnings => {
            let positives = record.learnings.positives.clone();
            let improvements = record.learnings.improvements.clone();
            view! {
                <div class="grid md:grid-cols-2 gap-6">
                    <Card>
                        <ItemList label=POSITIVES_LABEL items=positives />
                    </Card>
                    <Card>
                        <ItemList label=IMPROVEMENTS_LABEL items=improvements />
                    </Card>
                </div>
            }
            .into_view()
        }
        SectionKind::Resources => links
            .iter()
            .map(|(label, url)| view! {
                <a href=url.clone() target="_blank" rel="noreferrer"
                    class="inline-flex items-center px-4 py-2 mr-4 mb-4 rounded-lg border hover:bg-muted">
                    {*label}
                </a>
            })
            .collect_view(),
    }
}

/// Labelled bullet list; renders nothing when empty
#[component]
fn ItemList(label: &'static str, items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        return ().into_view();
    }

    view! {
        <h4 class="font-semibold mb-3">{label}</h4>
        <ul class="space-y-2 list-disc list-inside">
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
    .into_view()
}

/// Shown for ids that are not in the registry
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center gap-6">
            <h1 class="text-3xl font-bold">{NOT_FOUND_MESSAGE}</h1>
            <BackButton />
        </div>
    }
}
