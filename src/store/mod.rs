//! UniClubs Data Store
//!
//! The mock backend of the portal:
//!
//! - **types**: Records (Club, Event, Team, Member, User) and form drafts
//! - **engine**: The `ClubsApi` contract and the in-memory `DataStore`
//! - **seed**: Data the store starts with
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use uniclubs::config::LatencyConfig;
//! use uniclubs::store::{ClubsApi, DataStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DataStore::new(LatencyConfig::default());
//!
//!     let outcome = store.join_club(1).await?;
//!     println!("{}", outcome.message);
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod seed;
pub mod types;

pub use engine::{ClubsApi, DataStore, JoinOutcome, RsvpOutcome};
pub use error::{Entity, StoreError, StoreResult};
pub use types::{next_id, Club, Event, Member, MemberDraft, Team, TeamDefaults, TeamDraft, User};
