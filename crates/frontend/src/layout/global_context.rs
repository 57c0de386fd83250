use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const TOAST_TTL_MS: u32 = 4000;
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Add a toast; the oldest one is dropped above `MAX_TOASTS`
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
    }

    /// Remove by id; an unknown id is a no-op
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub toasts: RwSignal<ToastQueue>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Show a transient notification that expires after `TOAST_TTL_MS`
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.update(|q| {
            q.push(Toast {
                id: id.clone(),
                kind,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            toasts.try_update(|q| q.dismiss(&id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: &str) {
        self.toasts.update(|q| q.dismiss(id));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: &str) -> Toast {
        Toast {
            id: id.to_string(),
            kind: ToastKind::Info,
            message: format!("message {}", id),
        }
    }

    #[test]
    fn test_queue_drops_oldest_above_cap() {
        let mut q = ToastQueue::default();
        for i in 0..(MAX_TOASTS + 2) {
            q.push(toast(&i.to_string()));
        }
        assert_eq!(q.items().len(), MAX_TOASTS);
        assert_eq!(q.items()[0].id, "2");
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut q = ToastQueue::default();
        q.push(toast("a"));
        q.dismiss("zzz");
        assert_eq!(q.items().len(), 1);
        q.dismiss("a");
        assert!(q.items().is_empty());
    }
}
