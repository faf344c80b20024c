//! Action button state.

/// Lifecycle of a prepare/publish button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    InFlight,
    /// Last attempt failed; the button is usable again.
    Failed(String),
}

impl ActionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Button label for this state.
    pub fn label(&self, idle: &'static str, busy: &'static str) -> &'static str {
        if self.is_in_flight() { busy } else { idle }
    }
}

/// Which mutation a button triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Prepare,
    Publish,
}

impl ActionKind {
    pub fn idle_label(self) -> &'static str {
        match self {
            Self::Prepare => "Prepare release",
            Self::Publish => "Publish",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Prepare => "Preparing…",
            Self::Publish => "Publishing…",
        }
    }

    pub fn error_title(self) -> &'static str {
        match self {
            Self::Prepare => "Unable to prepare release",
            Self::Publish => "Unable to publish",
        }
    }

    /// Whether the button may be clicked given the state and file count.
    pub fn enabled(self, state: &ActionState, file_count: usize) -> bool {
        if state.is_in_flight() {
            return false;
        }
        match self {
            Self::Prepare => file_count > 0,
            Self::Publish => true,
        }
    }
}
