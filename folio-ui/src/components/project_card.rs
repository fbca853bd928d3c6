//! Project Card Component
//!
//! Summary of one project on the home page.

use folio::registry::ProjectRecord;
use folio::view::labels::DETAILS_BUTTON;
use leptos::*;

use super::Badge;

/// Project summary card linking to the detail page
#[component]
pub fn ProjectCard(
    record: ProjectRecord,
    /// Detail page hash
    #[prop(into)]
    href: String,
) -> impl IntoView {
    let card = record.card;

    view! {
        <div class="h-full rounded-xl border bg-white shadow-sm hover:shadow-lg transition-shadow p-6 flex flex-col">
            <h3 class="text-xl font-semibold mb-3">{record.title}</h3>
            <p class="mt-2 text-sm md:text-base text-muted">{card.summary}</p>

            <ul class="mt-4 list-disc list-inside text-sm space-y-1">
                {card.highlights
                    .into_iter()
                    .map(|highlight| view! { <li>{highlight}</li> })
                    .collect_view()}
            </ul>

            <div class="mt-4 flex flex-wrap gap-2">
                {card.stack
                    .into_iter()
                    .map(|entry| view! { <Badge label=entry /> })
                    .collect_view()}
            </div>

            <div class="mt-auto pt-4 flex flex-col gap-2">
                {card.live.map(|url| view! {
                    <a href=url target="_blank" rel="noreferrer" class="text-sm hover:underline">"Live"</a>
                })}
                {card.video.map(|url| view! {
                    <a href=url target="_blank" rel="noreferrer" class="text-sm hover:underline">"Video"</a>
                })}
                <a href=href class="w-full text-center px-4 py-2 rounded-lg bg-primary text-white font-medium">
                    {DETAILS_BUTTON}
                    " →"
                </a>
            </div>
        </div>
    }
}
