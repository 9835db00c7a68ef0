//! # UniClubs
//!
//! Campus clubs portal core: a mock backend with simulated latency, the
//! client-side view state, section routing, toast notifications and a
//! renderer that only draws into containers that exist.
//!
//! ## Modules
//!
//! - [`store`]: Mock data store behind the async `ClubsApi` contract
//! - [`state`]: View state (joined clubs, RSVPs, team roster, attendance, overlays)
//! - [`router`]: Section router with animated transitions
//! - [`render`]: Component renderer and mount-point registry
//! - [`notify`]: Toast queue with self-expiring entries
//! - [`portal`]: The application object tying them together
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use uniclubs::{Action, Config, Portal};
//!
//! #[tokio::main]
//! async fn main() {
//!     let portal = Portal::with_store(Config::default());
//!     portal.init().await;
//!
//!     portal.dispatch(Action::navigate("#clubs")).await;
//!     portal.dispatch(Action::ToggleClub { club_id: 2 }).await;
//!
//!     for toast in portal.notifications().active() {
//!         println!("{} {}", toast.kind.icon(), toast.message);
//!     }
//! }
//! ```

pub mod config;
pub mod notify;
pub mod portal;
pub mod render;
pub mod router;
pub mod state;
pub mod store;

pub use config::{Config, ConfigError, LatencyConfig, LoggingConfig, NotificationConfig, UiConfig};

pub use store::{
    Club, ClubsApi, DataStore, Entity, Event, JoinOutcome, Member, MemberDraft, RsvpOutcome,
    StoreError, StoreResult, Team, TeamDraft, User,
};

pub use state::{AttendanceEntry, JoinedClub, Modal, ViewState};

pub use router::{LoadHook, Route, Section, SectionRouter, Transition};

pub use render::{ComponentRenderer, Fragment, MountPoint, MountPoints, TargetRegistry};

pub use notify::{NotificationCenter, Notice, Toast, ToastEvent, ToastId, ToastKind};

pub use portal::{Action, Portal, PortalStats};
