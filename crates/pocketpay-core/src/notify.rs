//! Local notifications requested by the background worker.
//!
//! Pages post one of two message types; the worker turns them into
//! notifications with fixed visual parameters, either immediately or after a
//! delay.

use std::time::Duration;

use serde::Deserialize;
use tokio::sync::mpsc;

use crate::error::{WalletError, WalletResult};

/// Icon shown on every notification
pub const NOTIFICATION_ICON: &str = "/icons/icon-192.png";
/// Monochrome badge
pub const NOTIFICATION_BADGE: &str = "/icons/badge-72.png";
/// Vibration pattern, ms on/off/on
pub const VIBRATION_PATTERN: [u32; 3] = [200, 100, 200];

/// Message posted to the worker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerMessage {
    ShowNotification {
        title: String,
        body: String,
    },
    ScheduleNotification {
        title: String,
        body: String,
        /// Milliseconds until delivery
        delay: u64,
    },
}

impl WorkerMessage {
    /// Parse a posted JSON message. Unknown `type`s are an error.
    pub fn from_json(raw: &str) -> WalletResult<Self> {
        serde_json::from_str(raw).map_err(|e| {
            tracing::debug!("unrecognised worker message: {}", e);
            WalletError::UnknownMessage(raw.to_string())
        })
    }
}

/// Fully resolved notification handed to the display layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSpec {
    pub title: String,
    pub body: String,
    pub icon: &'static str,
    pub badge: &'static str,
    pub vibrate: [u32; 3],
}

impl NotificationSpec {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: NOTIFICATION_ICON,
            badge: NOTIFICATION_BADGE,
            vibrate: VIBRATION_PATTERN,
        }
    }
}

/// Delivers notifications onto a channel consumed by the UI.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<NotificationSpec>,
}

impl Notifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NotificationSpec>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Handle one worker message. Delayed notifications are delivered from
    /// a spawned task so the caller never waits.
    pub fn handle(&self, message: WorkerMessage) -> WalletResult<()> {
        match message {
            WorkerMessage::ShowNotification { title, body } => {
                self.deliver(NotificationSpec::new(title, body))
            }
            WorkerMessage::ScheduleNotification { title, body, delay } => {
                let notifier = self.clone();
                let spec = NotificationSpec::new(title, body);
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    if let Err(e) = notifier.deliver(spec) {
                        tracing::warn!("Dropped scheduled notification: {}", e);
                    }
                });
                Ok(())
            }
        }
    }

    fn deliver(&self, spec: NotificationSpec) -> WalletResult<()> {
        tracing::debug!(title = %spec.title, "notification delivered");
        self.tx.send(spec).map_err(|_| WalletError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_message_types() {
        let show = WorkerMessage::from_json(
            r#"{"type":"SHOW_NOTIFICATION","title":"Paid","body":"Sent $20"}"#,
        )
        .unwrap();
        assert_eq!(
            show,
            WorkerMessage::ShowNotification {
                title: "Paid".to_string(),
                body: "Sent $20".to_string()
            }
        );

        let scheduled = WorkerMessage::from_json(
            r#"{"type":"SCHEDULE_NOTIFICATION","title":"Reminder","body":"Pay rent","delay":5000}"#,
        )
        .unwrap();
        assert!(matches!(
            scheduled,
            WorkerMessage::ScheduleNotification { delay: 5000, .. }
        ));
    }

    #[test]
    fn unknown_message_rejected() {
        let err = WorkerMessage::from_json(r#"{"type":"SKIP_WAITING"}"#).unwrap_err();
        assert!(matches!(err, WalletError::UnknownMessage(_)));
    }

    #[test]
    fn fixed_visual_parameters() {
        let spec = NotificationSpec::new("t", "b");
        assert_eq!(spec.icon, NOTIFICATION_ICON);
        assert_eq!(spec.badge, NOTIFICATION_BADGE);
        assert_eq!(spec.vibrate, [200, 100, 200]);
    }

    #[tokio::test]
    async fn immediate_notification() {
        let (notifier, mut rx) = Notifier::new();
        notifier
            .handle(WorkerMessage::ShowNotification {
                title: "Paid".to_string(),
                body: "Sent".to_string(),
            })
            .unwrap();
        assert_eq!(rx.recv().await.unwrap().title, "Paid");
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_notification_waits() {
        let (notifier, mut rx) = Notifier::new();
        notifier
            .handle(WorkerMessage::ScheduleNotification {
                title: "Later".to_string(),
                body: "b".to_string(),
                delay: 3000,
            })
            .unwrap();

        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(3001)).await;
        assert_eq!(rx.recv().await.unwrap().title, "Later");
    }

    #[test]
    fn closed_channel_reported() {
        let (notifier, rx) = Notifier::new();
        drop(rx);
        let err = notifier
            .handle(WorkerMessage::ShowNotification {
                title: "t".to_string(),
                body: "b".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, WalletError::ChannelClosed));
    }
}
