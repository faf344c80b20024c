//! Preview state and the selection store that owns it.

use std::sync::Arc;

use crate::config::toast_ids;
use crate::core::error::FetchError;
use crate::core::policy;
use crate::core::{CsvTable, FetchedPreview};
use crate::models::ReleasedFile;
use crate::utils::ObjectUrl;

/// How a ready preview is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderKind {
    Table,
    Iframe,
    Image,
    Text,
    None,
}

/// Renderable preview content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewContent {
    Table(Arc<CsvTable>),
    Html(String),
    Image(Arc<ObjectUrl>),
    Text(String),
}

impl PreviewContent {
    pub fn render_kind(&self) -> RenderKind {
        match self {
            Self::Table(_) => RenderKind::Table,
            Self::Html(_) => RenderKind::Iframe,
            Self::Image(_) => RenderKind::Image,
            Self::Text(_) => RenderKind::Text,
        }
    }
}

/// State of the preview pane.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Idle,
    Loading,
    Ready(PreviewContent),
    Unsupported,
    Failed(FetchError),
}

impl PreviewState {
    /// Convert a pipeline result into the state shown to the user.
    ///
    /// CSV is parsed and images are registered as object URLs here, so
    /// either can still fail.
    pub fn from_fetched(result: Result<FetchedPreview, FetchError>) -> Self {
        let fetched = match result {
            Ok(fetched) => fetched,
            Err(e) => return Self::Failed(e),
        };

        let content = match fetched {
            FetchedPreview::Unsupported => return Self::Unsupported,
            FetchedPreview::Table(text) => {
                CsvTable::parse(&text).map(|table| PreviewContent::Table(Arc::new(table)))
            }
            FetchedPreview::Html(html) => Ok(PreviewContent::Html(html)),
            FetchedPreview::Text(text) => Ok(PreviewContent::Text(text)),
            FetchedPreview::Image { bytes, mime } => ObjectUrl::from_bytes(&bytes, &mime)
                .map(|url| PreviewContent::Image(Arc::new(url))),
        };

        match content {
            Ok(content) => Self::Ready(content),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn render_kind(&self) -> RenderKind {
        match self {
            Self::Ready(content) => content.render_kind(),
            _ => RenderKind::None,
        }
    }
}

/// Identifies one preview request.
///
/// A resolution is applied only while its ticket is still current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTicket {
    pub file_id: String,
    generation: u64,
}

/// The selected file and its preview.
///
/// Owned by the top-level viewer. Every selection bumps a generation
/// counter; responses for an older generation are discarded on arrival,
/// so the last selection wins.
/// Notification raised when an applied preview failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewFailure {
    /// One toast per file; a retry replaces the previous one.
    pub toast_id: String,
    pub title: &'static str,
    pub message: String,
}

/// Outcome of [`PreviewStore::settle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Another selection happened first; nothing changed.
    Stale,
    /// The state was applied, with a notification if it is a failure.
    Applied(Option<PreviewFailure>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewStore {
    selected: Option<ReleasedFile>,
    generation: u64,
    state: PreviewState,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&ReleasedFile> {
        self.selected.as_ref()
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn is_selected(&self, file_id: &str) -> bool {
        self.selected.as_ref().is_some_and(|f| f.id == file_id)
    }

    /// Select a file.
    ///
    /// Returns a ticket when the caller must fetch the preview. Files the
    /// policy rejects go straight to `Unsupported`. Re-selecting the
    /// current file is a no-op unless its last attempt failed.
    pub fn select(&mut self, file: ReleasedFile) -> Option<PreviewTicket> {
        if self.is_selected(&file.id) && !matches!(self.state, PreviewState::Failed(_)) {
            return None;
        }

        self.generation += 1;
        let file_id = file.id.clone();
        let gated = policy::check(&file.name, file.size);
        self.selected = Some(file);

        match gated {
            Ok(_) => {
                self.state = PreviewState::Loading;
                Some(PreviewTicket {
                    file_id,
                    generation: self.generation,
                })
            }
            Err(_) => {
                self.state = PreviewState::Unsupported;
                None
            }
        }
    }

    /// Apply a finished request. Returns `false` if it was superseded.
    pub fn resolve(&mut self, ticket: &PreviewTicket, state: PreviewState) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = state;
        true
    }

    /// Apply a finished request and work out what to tell the user.
    ///
    /// Superseded results are dropped silently, failures included.
    pub fn settle(
        &mut self,
        ticket: &PreviewTicket,
        file_name: &str,
        state: PreviewState,
    ) -> Resolution {
        let failure = match &state {
            PreviewState::Failed(e) => Some(PreviewFailure {
                toast_id: toast_ids::preview(&ticket.file_id),
                title: "Unable to load file",
                message: format!("{}: {}", file_name, e),
            }),
            _ => None,
        };

        if self.resolve(ticket, state) {
            Resolution::Applied(failure)
        } else {
            Resolution::Stale
        }
    }

    /// Whether the ticket belongs to the latest selection.
    pub fn is_current(&self, ticket: &PreviewTicket) -> bool {
        ticket.generation == self.generation && self.is_selected(&ticket.file_id)
    }

    /// Deselect and return to `Idle`.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.state = PreviewState::Idle;
    }
}
