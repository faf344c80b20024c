//! Root application module.
//!
//! Contains the main App component and [`AppContext`], the coordinator that
//! owns the file list, the selection/preview store, notifications and the
//! action buttons' state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::OutputsViewer;
use crate::config::{PageConfig, TOAST_TIMEOUT_MS, toast_ids};
use crate::core::{actions, load_file_list, load_preview, sort_files};
use crate::models::{
    ActionKind, ActionState, FileListResult, PreviewState, PreviewStore, ReleasedFile, Resolution,
    SortOrder, ToastStack,
};
use crate::utils::{WebTransport, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. All mutation goes through its methods.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Endpoints and tokens from the page.
    pub config: StoredValue<PageConfig>,
    /// Appended to content URLs; fixed for the page session.
    pub cache_buster: StoredValue<String>,
    /// Released files.
    pub files: RwSignal<FileListResult>,
    /// Current list ordering.
    pub sort: RwSignal<SortOrder>,
    /// Selected file and its preview.
    pub preview: RwSignal<PreviewStore>,
    /// On-screen notifications.
    pub toasts: RwSignal<ToastStack>,
    pub prepare: RwSignal<ActionState>,
    pub publish: RwSignal<ActionState>,
}

impl AppContext {
    pub fn new(config: PageConfig, cache_buster: String) -> Self {
        Self {
            config: StoredValue::new(config),
            cache_buster: StoredValue::new(cache_buster),
            files: RwSignal::new(FileListResult::Loading),
            sort: RwSignal::new(SortOrder::default()),
            preview: RwSignal::new(PreviewStore::new()),
            toasts: RwSignal::new(ToastStack::new()),
            prepare: RwSignal::new(ActionState::Idle),
            publish: RwSignal::new(ActionState::Idle),
        }
    }

    // ------------------------------------------------------------------------
    // File list
    // ------------------------------------------------------------------------

    /// Fetch the file list, replacing whatever was loaded before.
    pub fn load_files(&self) {
        let ctx = *self;
        let (url, token) = self
            .config
            .with_value(|c| (c.files_url.clone(), c.auth_token.clone()));
        ctx.files.set(FileListResult::Loading);

        spawn_local(async move {
            let mut result = load_file_list(&WebTransport, &url, &token).await;
            match &mut result {
                FileListResult::Loaded(files) => sort_files(files, ctx.sort.get_untracked()),
                FileListResult::Failed(e) => {
                    web_sys::console::warn_1(&format!("Failed to load file list: {}", e).into());
                    ctx.notify(toast_ids::FILE_LIST, "Unable to load files", &e.to_string());
                }
                FileListResult::Loading => {}
            }
            ctx.files.set(result);
        });
    }

    /// Change the list ordering. Does not refetch.
    pub fn set_sort(&self, order: SortOrder) {
        self.sort.set(order);
        self.files.update(|result| {
            if let FileListResult::Loaded(files) = result {
                sort_files(files, order);
            }
        });
    }

    // ------------------------------------------------------------------------
    // Selection and preview
    // ------------------------------------------------------------------------

    /// Select a file and start its preview.
    ///
    /// A response that arrives after another file was selected is dropped.
    pub fn select(&self, file: ReleasedFile) {
        let mut ticket = None;
        self.preview.update(|store| ticket = store.select(file.clone()));
        let Some(ticket) = ticket else {
            return;
        };

        let ctx = *self;
        let token = self.config.with_value(|c| c.auth_token.clone());
        let cache_buster = self.cache_buster.get_value();

        spawn_local(async move {
            let result = load_preview(&WebTransport, &file, &token, &cache_buster).await;
            let state = PreviewState::from_fetched(result);

            let mut resolution = Resolution::Stale;
            ctx.preview
                .update(|store| resolution = store.settle(&ticket, &file.name, state));

            match resolution {
                Resolution::Stale => web_sys::console::debug_1(
                    &format!("Discarding stale preview for {}", file.name).into(),
                ),
                Resolution::Applied(Some(failure)) => {
                    web_sys::console::warn_1(
                        &format!("Failed to load preview: {}", failure.message).into(),
                    );
                    ctx.notify(&failure.toast_id, failure.title, &failure.message);
                }
                Resolution::Applied(None) => {}
            }
        });
    }

    /// Close the preview.
    pub fn clear_selection(&self) {
        self.preview.update(|store| store.clear());
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// State signal for an action button.
    pub fn action_state(&self, kind: ActionKind) -> RwSignal<ActionState> {
        match kind {
            ActionKind::Prepare => self.prepare,
            ActionKind::Publish => self.publish,
        }
    }

    /// Run an action. Success leaves the page; failure re-enables the button.
    pub fn run_action(&self, kind: ActionKind) {
        let state = self.action_state(kind);
        if state.get_untracked().is_in_flight() {
            return;
        }

        let target = self.config.with_value(|c| match kind {
            ActionKind::Prepare => c.prepare_target(),
            ActionKind::Publish => c.publish_target(),
        });
        let Some((url, csrf_token)) = target else {
            return;
        };
        let file_ids: Vec<String> = self
            .files
            .with_untracked(|r| r.files().iter().map(|f| f.id.clone()).collect());

        let ctx = *self;
        state.set(ActionState::InFlight);

        spawn_local(async move {
            let outcome = match kind {
                ActionKind::Prepare => {
                    actions::prepare(&WebTransport, &url, &csrf_token, &file_ids)
                        .await
                        .map(Some)
                }
                ActionKind::Publish => actions::publish(&WebTransport, &url, &csrf_token)
                    .await
                    .map(|_| None),
            };

            match outcome {
                Ok(Some(next_url)) => dom::navigate(&next_url),
                Ok(None) => dom::reload(),
                Err(e) => {
                    web_sys::console::warn_1(&format!("{}: {}", kind.error_title(), e).into());
                    state.set(ActionState::Failed(e.message.clone()));
                    let id = match kind {
                        ActionKind::Prepare => toast_ids::PREPARE,
                        ActionKind::Publish => toast_ids::PUBLISH,
                    };
                    ctx.notify(id, kind.error_title(), &e.message);
                }
            }
        });
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    /// Show (or replace) a toast and schedule its auto-dismiss.
    pub fn notify(&self, id: &str, title: &str, message: &str) {
        let mut serial = 0;
        self.toasts
            .update(|stack| serial = stack.show(id, title, message));

        let toasts = self.toasts;
        let id = id.to_string();
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            toasts.update(|stack| stack.expire(&id, serial));
        });
    }

    pub fn dismiss(&self, id: &str) {
        self.toasts.update(|stack| stack.dismiss(id));
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the [`AppContext`], starts the file list load and
/// renders the viewer.
#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let ctx = AppContext::new(config, format!("{}", dom::now_ms() as u64));
    provide_context(ctx);
    ctx.load_files();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="outputs-viewer-error" role="alert">
                    <p>"Something went wrong while displaying the released files."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| dom::reload()>"Reload Page"</button>
                </div>
            }
        >
            <OutputsViewer />
        </ErrorBoundary>
    }
}

/// Shown instead of the viewer when the page is missing configuration.
#[component]
pub fn ConfigErrorView(message: String) -> impl IntoView {
    view! {
        <div class="outputs-viewer-error" role="alert">
            <p>"The outputs viewer could not start."</p>
            <p>{message}</p>
        </div>
    }
}
