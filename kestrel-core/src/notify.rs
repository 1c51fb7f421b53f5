use std::{sync::mpsc, time::Duration};

/// Receives user-facing error messages. Fire and forget.
pub trait NotificationSink: Send + Sync + 'static {
    fn notify(&self, message: &str);
}

/// A transient notification with a dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub action: &'static str,
    pub duration: Duration,
}

/// A [`NotificationSink`] that turns messages into [`Toast`]s and hands them
/// to whoever holds the receiving end, e.g. the front-end's event loop.
pub struct ToastSink {
    duration: Duration,
    tx: mpsc::Sender<Toast>,
}
impl ToastSink {
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);
    pub const DISMISS_ACTION: &str = "Close";

    pub fn new(duration: Duration) -> (Self, mpsc::Receiver<Toast>) {
        let (tx, rx) = mpsc::channel();
        (Self { duration, tx }, rx)
    }
}
impl NotificationSink for ToastSink {
    fn notify(&self, message: &str) {
        tracing::warn!("{message}");
        let toast = Toast {
            message: message.to_string(),
            action: Self::DISMISS_ACTION,
            duration: self.duration,
        };
        if self.tx.send(toast).is_err() {
            tracing::debug!("toast receiver dropped; notification not shown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_reach_the_receiver() {
        let (sink, rx) = ToastSink::new(ToastSink::DEFAULT_DURATION);
        sink.notify("network error");
        assert_eq!(
            rx.try_recv().unwrap(),
            Toast {
                message: "network error".to_string(),
                action: "Close",
                duration: Duration::from_secs(5),
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_receiver_is_tolerated() {
        let (sink, rx) = ToastSink::new(Duration::from_millis(100));
        drop(rx);
        sink.notify("nobody is listening");
    }
}
