//! Transient toast notifications.
//!
//! Every user-facing failure and success in the app lands here as a short
//! title + body pair. Kinds of failure are deliberately not distinguished
//! in the copy; the level only picks the color.

use std::time::Duration;

use leptos::*;

/// How long a toast stays on screen before dismissing itself.
const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub body: String,
}

/// Handle to the app-wide toast queue. Copy, so event handlers can capture
/// it freely. Provided once at the root, reached via [`Toaster::expect`].
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Create the queue and register it in the reactive context. Call once
    /// from the root component.
    pub fn provide() -> Self {
        let toaster = Self::new();
        provide_context(toaster);
        toaster
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// The live queue, for the host component to render.
    pub fn entries(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastLevel::Success, title.into(), body.into());
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastLevel::Error, title.into(), body.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, title: String, body: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                title,
                body,
            })
        });

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), DISMISS_AFTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_distinct_classes() {
        assert_eq!(ToastLevel::Success.css_class(), "toast success");
        assert_eq!(ToastLevel::Error.css_class(), "toast error");
        assert_ne!(
            ToastLevel::Success.css_class(),
            ToastLevel::Error.css_class()
        );
    }
}
