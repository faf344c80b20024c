//! Toast notifications.
//!
//! Renders [`crate::models::ToastStack`]. Each toast can be dismissed; a
//! toast shown again under the same id replaces the one on screen.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Toast;

stylance::import_crate_style!(css, "src/components/toasts/toasts.module.css");

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let toasts = Signal::derive(move || ctx.toasts.with(|s| s.iter().cloned().collect::<Vec<_>>()));

    view! {
        <div class=css::region aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| (toast.id.clone(), toast.serial)
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = toast.id.clone();

    view! {
        <div class=css::toast role="alert" data-toast-id=toast.id.clone()>
            <span class=css::icon><Icon icon=ic::WARNING /></span>
            <div class=css::body>
                <p class=css::title>{toast.title}</p>
                <p class=css::message>{toast.message}</p>
            </div>
            <button
                class=css::close
                on:click=move |_| ctx.dismiss(&id)
                title="Dismiss"
                aria-label="Dismiss notification"
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
