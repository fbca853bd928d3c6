//! App Root Component
//!
//! Builds the content, mounts the hash router on the browser window and
//! switches between the two pages.

use std::rc::Rc;

use folio::registry::Portfolio;
use folio::route::{Router, ViewState};
use leptos::*;

use crate::pages::{Home, ProjectDetail};
use crate::state::{provide_site_state, BrowserLocation};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let portfolio = match Portfolio::embedded() {
        Ok(portfolio) => portfolio,
        Err(e) => {
            web_sys::console::error_1(&format!("Content error: {}", e).into());
            return view! { <ContentError message=e.to_string() /> }.into_view();
        }
    };

    let Some(location) = BrowserLocation::new() else {
        web_sys::console::error_1(&"No browser window available".into());
        return view! { <ContentError message="No browser window available".to_string() /> }
            .into_view();
    };

    // Router writes, components read
    let router = Router::new(Rc::new(location));
    let view_state = create_rw_signal(router.current().clone());
    let mounted = router.mount(move |state| {
        // In-page anchors also fire hashchange; keep the page mounted for them
        if view_state.get_untracked() != *state {
            view_state.set(state.clone());
        }
    });

    provide_site_state(portfolio, mounted.navigator());

    // Removes the hashchange listener when the root is disposed
    on_cleanup(move || drop(mounted));

    view! {
        <div class="min-h-screen bg-gradient-to-b from-background to-muted">
            {move || match view_state.get() {
                ViewState::Home => view! { <Home /> }.into_view(),
                ViewState::Project { id } => view! { <ProjectDetail id=id /> }.into_view(),
            }}
        </div>
    }
    .into_view()
}

/// Shown when the compiled-in content does not parse
#[component]
fn ContentError(message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <h1 class="text-3xl font-bold mb-2">"Content error"</h1>
            <pre class="text-sm text-red-600 whitespace-pre-wrap max-w-3xl">{message}</pre>
        </div>
    }
}
