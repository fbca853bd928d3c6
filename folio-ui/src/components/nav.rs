//! Navigation Components
//!
//! Sticky header of the home page and the back button of the detail page.

use folio::view::{home::HERO_ANCHOR, labels::BACK_LABEL, NAV_ANCHORS};
use leptos::*;

use crate::state::use_site_state;

/// Home page header with in-page anchors
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_site_state();
    let name = state.portfolio.site.profile.name.clone();

    view! {
        <header class="sticky top-0 z-10 backdrop-blur bg-white/70 border-b">
            <div class="max-w-6xl mx-auto flex items-center justify-between px-4 md:px-6 h-16">
                <a href=format!("#{}", HERO_ANCHOR) class="font-bold text-lg">{name}</a>
                <nav class="hidden md:flex items-center gap-6 text-sm">
                    {NAV_ANCHORS
                        .iter()
                        .map(|anchor| view! {
                            <a href=anchor.href() class="hover:underline">{anchor.label}</a>
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

/// Clears the hash and returns to the home page
#[component]
pub fn BackButton() -> impl IntoView {
    let navigator = use_site_state().navigator;

    view! {
        <button
            class="flex items-center gap-2 px-3 py-2 rounded-lg hover:bg-muted"
            on:click=move |_| navigator.home()
        >
            <span aria-hidden="true">"←"</span>
            {BACK_LABEL}
        </button>
    }
}
