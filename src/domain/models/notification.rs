use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Severity of a snackbar notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            NotificationKind::Success => "c-snackbar--success",
            NotificationKind::Error => "c-snackbar--error",
            NotificationKind::Warning => "c-snackbar--warning",
            NotificationKind::Info => "c-snackbar--info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

/// Button shown inside a notification. Clicking it does not dismiss.
#[derive(Clone)]
pub struct NotificationAction {
    pub label: String,
    callback: Rc<dyn Fn()>,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, callback: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Rc::new(callback),
        }
    }

    pub fn callback(&self) -> Rc<dyn Fn()> {
        Rc::clone(&self.callback)
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NotificationAction {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && Rc::ptr_eq(&self.callback, &other.callback)
    }
}

/// What callers hand to the queue
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub action: Option<NotificationAction>,
}

impl NotificationRequest {
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration: None,
            action: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_action(mut self, label: impl Into<String>, callback: impl Fn() + 'static) -> Self {
        self.action = Some(NotificationAction::new(label, callback));
        self
    }
}

/// An enqueued request with its id and effective duration
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub duration: Duration,
    pub action: Option<NotificationAction>,
}

impl Notification {
    pub fn from_request(request: NotificationRequest, default_duration: Duration) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: request.kind,
            title: request.title,
            message: request.message,
            duration: request.duration.unwrap_or(default_duration),
            action: request.action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_fills_defaults() {
        let default = Duration::from_millis(5000);
        let a = Notification::from_request(NotificationRequest::success("Saved"), default);
        let b = Notification::from_request(
            NotificationRequest::error("Failed").with_duration(Duration::from_secs(1)),
            default,
        );

        assert_eq!(a.duration, default);
        assert_eq!(b.duration, Duration::from_secs(1));
        assert_ne!(a.id, b.id);
        assert_eq!(b.kind, NotificationKind::Error);
    }

    #[test]
    fn test_action_equality_is_by_identity() {
        let action = NotificationAction::new("Undo", || {});
        let same = action.clone();
        let other = NotificationAction::new("Undo", || {});

        assert_eq!(action, same);
        assert_ne!(action, other);
    }

    #[test]
    fn test_kind_presentation() {
        assert_eq!(NotificationKind::Warning.as_str(), "warning");
        assert_eq!(NotificationKind::Info.css_modifier(), "c-snackbar--info");
    }
}
