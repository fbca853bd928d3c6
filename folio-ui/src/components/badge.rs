//! Badge Component

use leptos::*;

/// Small rounded label for tools, stack entries and status
#[component]
pub fn Badge(
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <span class="inline-block px-3 py-1 rounded-full bg-muted text-sm font-medium">
            {label}
        </span>
    }
}
