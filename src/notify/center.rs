//! Notification Center
//!
//! Holds the visible toasts in insertion order. Each toast schedules its own
//! removal when it is enqueued; dismissing one never affects another.
//! Lifecycle events go out on a tokio broadcast channel.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::toast::{DismissReason, Notice, Toast, ToastEvent, ToastId, ToastKind};
use crate::config::NotificationConfig;

/// Queue of on-screen toasts
///
/// Cloning yields another handle onto the same queue.
#[derive(Clone)]
pub struct NotificationCenter {
    toasts: Arc<RwLock<Vec<Toast>>>,
    events_tx: broadcast::Sender<ToastEvent>,
    config: NotificationConfig,
}

impl NotificationCenter {
    pub fn new(config: NotificationConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.broadcast_capacity.max(1));

        Self {
            toasts: Arc::new(RwLock::new(Vec::new())),
            events_tx,
            config,
        }
    }

    /// Show a toast and schedule its removal
    ///
    /// Must be called from within a tokio runtime.
    pub fn enqueue(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let toast = Toast::new(message, kind);
        let id = toast.id;

        tracing::debug!(toast_id = %id, kind = %kind, message = %toast.message, "Toast shown");

        self.toasts.write().push(toast.clone());
        let _ = self.events_tx.send(ToastEvent::Shown { toast });

        let center = self.clone();
        let lifetime = self.config.lifetime();
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            center.remove(id, DismissReason::Expired);
        });

        id
    }

    pub fn notify(&self, notice: Notice) -> ToastId {
        self.enqueue(notice.message, notice.kind)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(message, ToastKind::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(message, ToastKind::Info)
    }

    /// Remove a toast before its window elapses
    ///
    /// Returns false if it was already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.remove(id, DismissReason::User)
    }

    fn remove(&self, id: ToastId, reason: DismissReason) -> bool {
        let removed = {
            let mut toasts = self.toasts.write();
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        };

        if removed {
            tracing::trace!(toast_id = %id, reason = ?reason, "Toast removed");
            let _ = self.events_tx.send(ToastEvent::Dismissed { id, reason });
        }

        removed
    }

    /// Visible toasts, oldest first
    pub fn active(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.toasts.read().iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.toasts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.read().is_empty()
    }

    /// Drop every visible toast without publishing events
    pub fn clear(&self) {
        self.toasts.write().clear();
    }

    /// Receive toast lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.events_tx.subscribe()
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn center() -> NotificationCenter {
        NotificationCenter::new(NotificationConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_window() {
        let center = center();
        let id = center.success("Saved");
        assert_eq!(center.len(), 1);

        // Still visible just before the window closes
        tokio::time::sleep(Duration::from_millis(3299)).await;
        assert!(center.get(id).is_some());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(center.get(id).is_none());
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_removes_immediately() {
        let center = center();
        let id = center.info("Hello");

        assert!(center.dismiss(id));
        assert!(center.is_empty());
        assert!(!center.dismiss(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_are_independent() {
        let center = center();
        let first = center.success("first");
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let second = center.error("second");
        let third = center.info("third");

        let ids: Vec<_> = center.active().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, second, third]);

        // Dismissing one leaves the others alone
        center.dismiss(second);
        assert_eq!(center.len(), 2);

        // First expires at 3300ms, third at 4300ms
        tokio::time::sleep(Duration::from_millis(2400)).await;
        assert_eq!(center.active().iter().map(|t| t.id).collect::<Vec<_>>(), vec![third]);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_deduplication() {
        let center = center();
        center.info("same");
        center.info("same");
        assert_eq!(center.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_published() {
        let center = center();
        let mut rx = center.subscribe();

        let id = center.notify(Notice::error("Club not found"));
        center.dismiss(id);

        match rx.recv().await.unwrap() {
            ToastEvent::Shown { toast } => {
                assert_eq!(toast.id, id);
                assert_eq!(toast.kind, ToastKind::Error);
                assert_eq!(toast.message, "Club not found");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(
            rx.recv().await.unwrap(),
            ToastEvent::Dismissed {
                id,
                reason: DismissReason::User
            }
        );

        // The expiry timer finds nothing to remove and stays quiet
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_event_reason() {
        let center = center();
        let mut rx = center.subscribe();
        let id = center.success("bye");

        let _shown = rx.recv().await.unwrap();
        assert_eq!(
            rx.recv().await.unwrap(),
            ToastEvent::Dismissed {
                id,
                reason: DismissReason::Expired
            }
        );
    }
}
