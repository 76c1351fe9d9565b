//! Transient user notifications ("toasts").
//!
//! Pages push a toast for every completed user action. The log keeps them
//! in order so a UI layer (or a test) can render or inspect them.

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Shared, cloneable toast log.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    log: Arc<Mutex<Vec<Toast>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        });
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        });
    }

    pub fn push(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => {
                tracing::info!(title = %toast.title, description = %toast.description, "Toast")
            }
            ToastVariant::Destructive => {
                tracing::warn!(title = %toast.title, description = %toast.description, "Error toast")
            }
        }
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }

    /// Snapshot of every toast shown so far.
    pub fn all(&self) -> Vec<Toast> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Remove and return all pending toasts.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.log.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
