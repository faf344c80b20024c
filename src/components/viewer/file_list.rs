//! File list component.
//!
//! Displays the released files with their short names, sizes and release
//! dates. Single click selects a file for preview.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::policy::FileKind;
use crate::models::{FileListResult, ReleasedFile, SortOrder};
use crate::utils::format::{format_date, format_size};

stylance::import_crate_style!(css, "src/components/viewer/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::list>
            <SortToggle />
            {move || match ctx.files.get() {
                FileListResult::Loading => view! {
                    <p class=css::status>"Loading files…"</p>
                }.into_any(),
                FileListResult::Failed(e) => view! {
                    <p class=css::error role="alert">
                        {format!("Unable to load files: {}", e)}
                    </p>
                }.into_any(),
                FileListResult::Loaded(files) if files.is_empty() => view! {
                    <p class=css::status>"No files have been released yet."</p>
                }.into_any(),
                FileListResult::Loaded(files) => view! {
                    <ul class=css::items role="listbox" aria-label="Released files">
                        {files
                            .into_iter()
                            .map(|file| view! { <FileListItem file=file /> })
                            .collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}

/// Name / Newest ordering buttons.
#[component]
fn SortToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let button = move |order: SortOrder| {
        let pressed = move || ctx.sort.get() == order;
        view! {
            <button
                class=move || {
                    if pressed() {
                        format!("{} {}", css::sortButton, css::sortButtonActive)
                    } else {
                        css::sortButton.to_string()
                    }
                }
                aria-pressed=move || pressed().to_string()
                on:click=move |_| ctx.set_sort(order)
            >
                {order.label()}
            </button>
        }
    };

    view! {
        <div class=css::toolbar role="group" aria-label="Sort files">
            <span class=css::toolbarLabel>"Sort by"</span>
            {button(SortOrder::Name)}
            {button(SortOrder::Newest)}
        </div>
    }
}

#[component]
fn FileListItem(file: ReleasedFile) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = file.id.clone();
    let is_selected = Signal::derive(move || ctx.preview.with(|s| s.is_selected(&id)));

    let icon = ic::for_kind(FileKind::classify(&file.name));
    let display_name = file.display_name().to_string();
    let size = format_size(file.size);
    let date = file.timestamp().map(format_date).unwrap_or_default();
    let is_deleted = file.is_deleted;
    let title = file.name.clone();

    let name_class = if is_deleted {
        format!("{} {}", css::name, css::nameDeleted)
    } else {
        css::name.to_string()
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::item, css::selected)
        } else {
            css::item.to_string()
        }
    };

    let keyboard_file = file.clone();
    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if activates_item(&ev.key()) {
            ev.prevent_default();
            ctx.select(keyboard_file.clone());
        }
    };
    let handle_click = move |_: leptos::ev::MouseEvent| ctx.select(file.clone());

    view! {
        <li
            class=item_class
            on:click=handle_click
            on:keydown=handle_keydown
            role="option"
            tabindex="0"
            title=title
            aria-selected=move || is_selected.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{display_name}</span>
            {is_deleted.then(|| view! { <span class=css::badge>"deleted"</span> })}
            <span class=css::date>{date}</span>
            <span class=css::size>{size}</span>
        </li>
    }
}

/// Keys that select a focused list item.
fn activates_item(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
