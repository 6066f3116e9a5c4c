//! Transient notifications shown after a create request settles.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    shown_at: Option<Instant>,
}

impl Default for ToastState {
    fn default() -> Self {
        Self { message: String::new(), kind: ToastKind::Success, visible: false, shown_at: None }
    }
}

impl ToastState {
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.shown_at = Some(now);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message, Instant::now());
    }

    /// Hide the toast; the last message is kept.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.shown_at = None;
    }

    /// Auto-dismiss once [`TOAST_TTL`] has elapsed since it was shown.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.shown_at {
            if now.saturating_duration_since(at) >= TOAST_TTL {
                self.dismiss();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_visible_until_ttl() {
        let t0 = Instant::now();
        let mut toast = ToastState::default();
        toast.show(ToastKind::Success, "User added successfully!", t0);

        toast.tick(t0 + Duration::from_millis(3999));
        assert!(toast.visible);

        toast.tick(t0 + TOAST_TTL);
        assert!(!toast.visible);
        assert_eq!(toast.message, "User added successfully!");
    }

    #[test]
    fn new_toast_restarts_the_timer() {
        let t0 = Instant::now();
        let mut toast = ToastState::default();
        toast.show(ToastKind::Success, "first", t0);
        toast.show(ToastKind::Error, "second", t0 + Duration::from_secs(3));
        toast.tick(t0 + Duration::from_secs(5));
        assert!(toast.visible);
        assert_eq!(toast.kind, ToastKind::Error);
    }
}
