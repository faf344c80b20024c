//! Preview body: one renderer per [`RenderKind`], plus the loading,
//! unsupported and failure fallbacks.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{CsvTableView, PreviewData};
use crate::components::icons as ic;
use crate::core::policy::FileKind;
use crate::models::{PreviewContent, PreviewState};

stylance::import_crate_style!(css, "src/components/viewer/preview/preview.module.css");

/// Preview body for the current state.
#[component]
pub fn PreviewBody(data: PreviewData) -> impl IntoView {
    view! {
        {move || {
            let name = data.file.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default());

            match data.state.get() {
                PreviewState::Idle => ().into_any(),
                PreviewState::Loading => view! {
                    <div class=css::loading>"Loading…"</div>
                }.into_any(),
                PreviewState::Unsupported => view! {
                    <div class=css::noPreview>
                        <span class=css::stateIcon><Icon icon=ic::INFO /></span>
                        <p class=css::hint>"No preview available for this file."</p>
                    </div>
                }.into_any(),
                PreviewState::Failed(err) => view! {
                    <div class=css::error role="alert">
                        <span class=css::stateIcon><Icon icon=ic::WARNING /></span>
                        <p class=css::hint>{format!("Unable to load file {}", name)}</p>
                        <p class=css::description>{err.to_string()}</p>
                    </div>
                }.into_any(),
                PreviewState::Ready(content) => {
                    let is_json = data.kind.get() == FileKind::Json;
                    ready_view(content, name, is_json)
                }
            }
        }}
    }
}

fn ready_view(content: PreviewContent, name: String, is_json: bool) -> AnyView {
    match content {
        PreviewContent::Table(table) => view! { <CsvTableView table=table /> }.into_any(),
        PreviewContent::Html(html) => view! {
            <iframe
                class=css::frame
                srcdoc=html
                sandbox=""
                title=name
            />
        }.into_any(),
        PreviewContent::Image(url) => view! {
            <div class=css::imagePreview>
                <img class=css::image src=url.as_str().to_string() alt=name />
            </div>
        }.into_any(),
        PreviewContent::Text(text) => {
            let text = if is_json { pretty_json(&text).unwrap_or(text) } else { text };
            view! { <pre class=css::text>{text}</pre> }.into_any()
        }
    }
}

/// Re-indent JSON for display; `None` if it does not parse.
fn pretty_json(text: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json() {
        assert_eq!(
            pretty_json(r#"{"a":[1,2]}"#).as_deref(),
            Some("{\n  \"a\": [\n    1,\n    2\n  ]\n}")
        );
        assert_eq!(pretty_json("not json"), None);
    }
}
