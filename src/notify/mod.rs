//! Toast Notifications
//!
//! ## Architecture
//!
//! - **NotificationCenter**: The visible toast queue and its expiry timers
//! - **Toast / Notice**: A shown toast, and the message that produces one
//! - **ToastEvent**: Lifecycle events for shells that draw the toasts
//!
//! Toasts stack in insertion order and each one leaves on its own schedule:
//! `dismiss_after_ms + fade_out_ms` after it was shown, or immediately when
//! dismissed by the user.

mod center;
mod toast;

pub use center::NotificationCenter;
pub use toast::{DismissReason, Notice, Toast, ToastEvent, ToastId, ToastKind};
