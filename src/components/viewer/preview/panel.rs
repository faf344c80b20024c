//! Preview side panel.
//!
//! Header with the file's metadata, body with the rendered content.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{PreviewBody, use_preview};
use crate::components::icons as ic;
use crate::models::ReleasedFile;
use crate::utils::format::{format_date, format_size, short_digest};

stylance::import_crate_style!(css, "src/components/viewer/preview/preview.module.css");

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let data = use_preview();

    view! {
        <aside class=css::panel role="complementary" aria-label="File preview">
            <header class=css::header>
                {move || data.file.get().map(|file| view! { <FileMeta file=file /> })}
                <button
                    class=css::closeButton
                    on:click=move |_| data.close()
                    title="Close preview"
                    aria-label="Close preview"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <div class=css::content>
                <PreviewBody data=data />
            </div>
        </aside>
    }
}

#[component]
fn FileMeta(file: ReleasedFile) -> impl IntoView {
    let date = file.timestamp().map(format_date).unwrap_or_else(|| file.date.clone());
    let digest = short_digest(&file.sha256).to_string();

    view! {
        <div class=css::meta>
            <p class=css::fileName title=file.name.clone()>{file.name.clone()}</p>
            <p class=css::details>
                <span>{format_size(file.size)}</span>
                <span>{date}</span>
                <span title=file.sha256.clone()>{format!("sha256 {}", digest)}</span>
            </p>
            {file.is_deleted.then(|| view! {
                <p class=css::deleted>"This file has been deleted."</p>
            })}
        </div>
    }
}
