//! Visual Card Component
//!
//! One image of the visuals gallery. If the image fails to load, a chart glyph
//! takes its place.

use folio::registry::Visual;
use folio::view::resolve_asset;
use leptos::*;

/// Visual card component
#[component]
pub fn VisualCard(
    visual: Visual,
    asset_base: &'static str,
) -> impl IntoView {
    let failed = create_rw_signal(false);
    let src = resolve_asset(asset_base, &visual.src);
    let alt = visual.title.clone();

    view! {
        <div class="rounded-xl border bg-white shadow-sm overflow-hidden">
            <div class="aspect-video bg-muted flex items-center justify-center" data-kind=visual.kind.to_string()>
                {move || if failed.get() {
                    view! {
                        <span class="text-5xl text-muted" role="img" aria-label=alt.clone()>"📊"</span>
                    }.into_view()
                } else {
                    view! {
                        <img
                            src=src.clone()
                            alt=alt.clone()
                            class="w-full h-full object-cover"
                            on:error=move |_| failed.set(true)
                        />
                    }.into_view()
                }}
            </div>
            <div class="p-4">
                <h4 class="font-semibold mb-2">{visual.title}</h4>
                <p class="text-sm text-muted">{visual.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::registry::VisualKind;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_card(src: &str) -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();

        let visual = Visual {
            title: "Churn by contract".to_string(),
            kind: VisualKind::Chart,
            src: src.to_string(),
            description: String::new(),
        };
        mount_to(parent.clone(), move || view! { <VisualCard visual=visual asset_base="/" /> });
        parent
    }

    #[wasm_bindgen_test]
    fn test_image_shown_until_error() {
        let parent = mount_card("img/churn.png");
        let img = parent.query_selector("img").unwrap().unwrap();
        assert_eq!(img.get_attribute("src").as_deref(), Some("/img/churn.png"));
        assert!(!parent.text_content().unwrap_or_default().contains("📊"));
    }

    #[wasm_bindgen_test]
    fn test_load_error_shows_placeholder() {
        let parent = mount_card("img/does-not-exist.png");
        let img = parent.query_selector("img").unwrap().unwrap();

        let error = web_sys::Event::new("error").unwrap();
        img.dispatch_event(&error).unwrap();

        assert!(parent.query_selector("img").unwrap().is_none());
        let placeholder = parent.query_selector("[role=img]").unwrap().unwrap();
        assert_eq!(placeholder.text_content().as_deref(), Some("📊"));
        assert_eq!(placeholder.get_attribute("aria-label").as_deref(), Some("Churn by contract"));
    }
}
