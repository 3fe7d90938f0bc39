//! Fire-and-forget notification side channel (toasts in the portal UI).

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// One emitted notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
}

/// Receiver of store notifications.
///
/// Calls are never awaited and never influence store state, so implementations
/// must not block.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, kind: NoticeKind, title: &str, description: Option<&str>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _kind: NoticeKind, _title: &str, _description: Option<&str>) {}
}

/// Writes notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, description: Option<&str>) {
        let description = description.unwrap_or("");
        match kind {
            NoticeKind::Success => info!("{}: {}", title, description),
            NoticeKind::Error => warn!("{}: {}", title, description),
        }
    }
}

/// Forwards notifications into an unbounded tokio channel.
///
/// A dropped receiver is not an error; the notice is discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, description: Option<&str>) {
        let _ = self.sender.send(Notice {
            kind,
            title: title.to_string(),
            description: description.map(str::to_string),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_forwards_notices() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier.notify(NoticeKind::Success, "Success", Some("Item created successfully"));

        let notice = receiver.try_recv().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.description.as_deref(), Some("Item created successfully"));
    }

    #[test]
    fn test_channel_notifier_survives_dropped_receiver() {
        let (notifier, receiver) = ChannelNotifier::new();
        drop(receiver);
        notifier.notify(NoticeKind::Error, "Error", None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NoticeKind::Success.to_string(), "success");
        assert_eq!(NoticeKind::Error.to_string(), "error");
    }
}
