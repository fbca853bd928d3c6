//! Metric Card Component
//!
//! Displays one headline result with its optional qualifier.

use folio::registry::Metric;
use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(metric: Metric) -> impl IntoView {
    let delta = metric.delta().map(str::to_string);

    view! {
        <div class="rounded-xl border bg-white shadow-sm p-4 text-center">
            <div class="text-2xl font-bold text-primary">{metric.value.clone()}</div>
            <div class="text-sm text-muted">{metric.label.clone()}</div>
            {delta.map(|delta| view! {
                <div class="text-xs text-green-600 mt-1">{delta}</div>
            })}
        </div>
    }
}
