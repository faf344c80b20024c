//! Prepare / Publish buttons.
//!
//! A button is rendered only when the page configured its endpoint. While
//! the request is in flight the button is disabled and relabelled.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{ActionKind, ActionState};

stylance::import_crate_style!(css, "src/components/viewer/actions.module.css");

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (can_prepare, can_publish) = ctx.config.with_value(|c| {
        (c.prepare_target().is_some(), c.publish_target().is_some())
    });

    view! {
        <div class=css::bar>
            <h2 class=css::title>"Released files"</h2>
            <div class=css::buttons>
                {can_prepare.then(|| view! { <ActionButton kind=ActionKind::Prepare /> })}
                {can_publish.then(|| view! { <ActionButton kind=ActionKind::Publish /> })}
            </div>
        </div>
    }
}

#[component]
fn ActionButton(kind: ActionKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.action_state(kind);

    let file_count = Signal::derive(move || ctx.files.with(|r| r.files().len()));
    let enabled = Signal::derive(move || state.with(|s| kind.enabled(s, file_count.get())));
    let label = move || state.with(|s| s.label(kind.idle_label(), kind.busy_label()));
    let failure = move || match state.get() {
        ActionState::Failed(message) => Some(message),
        _ => None,
    };

    view! {
        <div class=css::action>
            <button
                class=css::button
                disabled=move || !enabled.get()
                aria-busy=move || state.with(|s| s.is_in_flight()).to_string()
                on:click=move |_| ctx.run_action(kind)
            >
                {label}
            </button>
            {move || failure().map(|message| view! {
                <span class=css::failure role="status">{message}</span>
            })}
        </div>
    }
}
