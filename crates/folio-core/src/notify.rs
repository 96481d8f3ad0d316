//! Transient toast notifications.
//!
//! A toast enters off-screen and slides in after [`TOAST_SLIDE_IN`]. Both
//! that timer and [`TOAST_VISIBLE`] count from creation, so the slide-out
//! starts [`TOAST_VISIBLE`] after the toast was pushed; it is removed
//! [`TOAST_SLIDE_OUT`] later. The queue only tracks phases; the host runs
//! the [`TOAST_STEPS`] timers.

use std::time::Duration;

pub const TOAST_SLIDE_IN: Duration = Duration::from_millis(100);
pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);
pub const TOAST_SLIDE_OUT: Duration = Duration::from_millis(300);

/// Waits between consecutive phase changes, each measured from the
/// previous change: show, begin dismiss, remove.
pub const TOAST_STEPS: [Duration; 3] = [
    TOAST_SLIDE_IN,
    TOAST_VISIBLE.saturating_sub(TOAST_SLIDE_IN),
    TOAST_SLIDE_OUT,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Font Awesome icon name
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "info-circle",
            ToastKind::Success => "check-circle",
            ToastKind::Error => "exclamation-circle",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: ToastId,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id, kind = kind.class(), %message, "Toast queued");
        self.items.push(Toast {
            id,
            message,
            kind,
            phase: ToastPhase::Entering,
        });
        id
    }

    pub fn show(&mut self, id: ToastId) {
        self.set_phase(id, ToastPhase::Shown);
    }

    pub fn begin_dismiss(&mut self, id: ToastId) {
        self.set_phase(id, ToastPhase::Leaving);
    }

    pub fn remove(&mut self, id: ToastId) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn set_phase(&mut self, id: ToastId, phase: ToastPhase) {
        if let Some(toast) = self.items.iter_mut().find(|toast| toast.id == id) {
            toast.phase = phase;
        }
    }
}
