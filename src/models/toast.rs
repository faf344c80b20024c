//! Dismissible notifications keyed by id.

/// A notification on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Bumped on every show, so a stale auto-dismiss timer can be ignored.
    pub serial: u64,
}

/// Notifications in display order.
///
/// Showing a toast whose id is already on screen replaces it in place
/// rather than stacking a second copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_serial: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or replace the toast with this id. Returns its serial.
    pub fn show(&mut self, id: &str, title: &str, message: &str) -> u64 {
        self.next_serial += 1;
        let toast = Toast {
            id: id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            serial: self.next_serial,
        };

        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(existing) => *existing = toast,
            None => self.toasts.push(toast),
        }
        self.next_serial
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Dismiss only if the toast was not replaced since `serial`.
    pub fn expire(&mut self, id: &str, serial: u64) {
        self.toasts.retain(|t| !(t.id == id && t.serial == serial));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
