//! Section Components
//!
//! Page sections with a heading, and the card container used inside them.

use leptos::*;

/// A titled page section
#[component]
pub fn Section(
    /// Element id targeted by in-page anchors
    #[prop(into)]
    id: String,
    #[prop(into)]
    heading: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="max-w-6xl mx-auto px-4 md:px-6 py-12">
            <h2 class="text-2xl md:text-3xl font-bold mb-6">{heading}</h2>
            {children()}
        </section>
    }
}

/// Bordered content card
#[component]
pub fn Card(
    #[prop(into, optional)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border bg-white shadow-sm p-6">
            {title.map(|title| view! { <h3 class="text-lg font-semibold mb-3">{title}</h3> })}
            {children()}
        </div>
    }
}
