//! Mock Data Store
//!
//! In-memory clubs, events, teams and the current user. Every read and write
//! except `current_user` completes after a simulated network delay.
//!
//! Overlapping calls are not serialized: each call sleeps for its own latency
//! and then applies its change, so two `join_club` calls on the same id both
//! increment the member count. There is no cancellation path; a call that has
//! been awaited always runs to completion or `NotFound`.

use crate::config::LatencyConfig;
use crate::store::error::{StoreError, StoreResult};
use crate::store::seed;
use crate::store::types::{next_id, Club, Event, MemberDraft, Team, TeamDefaults, TeamDraft, User};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// Result of a successful `join_club`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JoinOutcome {
    pub message: String,
}

/// Result of a successful `toggle_rsvp`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RsvpOutcome {
    pub message: String,
    /// RSVP state after the toggle
    pub rsvpd: bool,
}

/// The backend contract consumed by the portal
#[async_trait]
pub trait ClubsApi: Send + Sync {
    /// Sign in. Any email/password pair is accepted.
    async fn login(&self, email: &str, password: &str) -> User;

    /// Sign out. Always succeeds, even when nobody is signed in.
    async fn logout(&self);

    /// The signed-in user, without delay
    fn current_user(&self) -> Option<User>;

    async fn list_clubs(&self) -> Vec<Club>;

    async fn list_events(&self) -> Vec<Event>;

    async fn list_teams(&self) -> Vec<Team>;

    /// Mark a club as joined and bump its member count by one
    async fn join_club(&self, id: u32) -> StoreResult<JoinOutcome>;

    /// Flip the RSVP flag of an event
    async fn toggle_rsvp(&self, id: u32) -> StoreResult<RsvpOutcome>;

    /// Create a team under a fresh id
    async fn add_team(&self, draft: TeamDraft) -> Team;

    /// Append a member to an existing team
    async fn add_team_member(&self, team_id: u32, member: MemberDraft) -> StoreResult<Team>;
}

/// Collections held by the store
#[derive(Debug, Clone)]
struct StoreState {
    current_user: Option<User>,
    clubs: Vec<Club>,
    events: Vec<Event>,
    teams: Vec<Team>,
}

impl StoreState {
    fn seeded() -> Self {
        Self {
            current_user: None,
            clubs: seed::clubs(),
            events: seed::events(),
            teams: seed::teams(),
        }
    }
}

/// In-memory implementation of [`ClubsApi`]
///
/// Cloning yields another handle onto the same collections.
#[derive(Clone)]
pub struct DataStore {
    state: Arc<RwLock<StoreState>>,
    latency: LatencyConfig,
    defaults: TeamDefaults,
}

impl DataStore {
    /// Create a store holding the seed data
    pub fn new(latency: LatencyConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::seeded())),
            latency,
            defaults: TeamDefaults::STANDARD,
        }
    }

    /// Create a store with explicit collections
    pub fn with_data(
        latency: LatencyConfig,
        clubs: Vec<Club>,
        events: Vec<Event>,
        teams: Vec<Team>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                current_user: None,
                clubs,
                events,
                teams,
            })),
            latency,
            defaults: TeamDefaults::STANDARD,
        }
    }

    /// Restore the seed data and sign out
    pub fn reset(&self) {
        *self.state.write() = StoreState::seeded();
        tracing::debug!("Store reset to seed data");
    }

    pub fn latency(&self) -> &LatencyConfig {
        &self.latency
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[async_trait]
impl ClubsApi for DataStore {
    async fn login(&self, email: &str, _password: &str) -> User {
        tokio::time::sleep(self.latency.login()).await;

        let user = User::from_email(email);
        self.state.write().current_user = Some(user.clone());

        tracing::info!(user = %user.name, "Signed in");
        user
    }

    async fn logout(&self) {
        tokio::time::sleep(self.latency.logout()).await;

        let previous = self.state.write().current_user.take();
        if let Some(user) = previous {
            tracing::info!(user = %user.name, "Signed out");
        }
    }

    fn current_user(&self) -> Option<User> {
        self.state.read().current_user.clone()
    }

    async fn list_clubs(&self) -> Vec<Club> {
        tokio::time::sleep(self.latency.list()).await;
        self.state.read().clubs.clone()
    }

    async fn list_events(&self) -> Vec<Event> {
        tokio::time::sleep(self.latency.list()).await;
        self.state.read().events.clone()
    }

    async fn list_teams(&self) -> Vec<Team> {
        tokio::time::sleep(self.latency.list()).await;
        self.state.read().teams.clone()
    }

    async fn join_club(&self, id: u32) -> StoreResult<JoinOutcome> {
        tokio::time::sleep(self.latency.join_club()).await;

        let mut state = self.state.write();
        let club = state.clubs.iter_mut().find(|c| c.id == id).ok_or_else(|| {
            tracing::warn!(club_id = id, "Join requested for unknown club");
            StoreError::club(id)
        })?;

        club.joined = true;
        club.member_count += 1;

        tracing::info!(club_id = id, members = club.member_count, "Club joined");
        Ok(JoinOutcome {
            message: format!("Joined {}!", club.name),
        })
    }

    async fn toggle_rsvp(&self, id: u32) -> StoreResult<RsvpOutcome> {
        tokio::time::sleep(self.latency.toggle_rsvp()).await;

        let mut state = self.state.write();
        let event = state.events.iter_mut().find(|e| e.id == id).ok_or_else(|| {
            tracing::warn!(event_id = id, "RSVP requested for unknown event");
            StoreError::event(id)
        })?;

        event.rsvpd = !event.rsvpd;

        let message = if event.rsvpd {
            format!("RSVP'd to {}!", event.title)
        } else {
            format!("Removed RSVP for {}!", event.title)
        };

        tracing::info!(event_id = id, rsvpd = event.rsvpd, "RSVP toggled");
        Ok(RsvpOutcome {
            message,
            rsvpd: event.rsvpd,
        })
    }

    async fn add_team(&self, draft: TeamDraft) -> Team {
        tokio::time::sleep(self.latency.add_team()).await;

        let mut state = self.state.write();
        let id = next_id(state.teams.iter().map(|t| &t.id));
        let team = draft.resolve(id, &self.defaults);
        state.teams.push(team.clone());

        tracing::info!(team_id = id, name = %team.name, "{} has been added!", team.name);
        team
    }

    async fn add_team_member(&self, team_id: u32, member: MemberDraft) -> StoreResult<Team> {
        tokio::time::sleep(self.latency.add_team_member()).await;

        let mut state = self.state.write();
        let team = state
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| {
                tracing::warn!(team_id, "Member added to unknown team");
                StoreError::team(team_id)
            })?;

        team.members.push(member.resolve(&self.defaults));

        tracing::info!(team_id, members = team.members.len(), "Member added to {}!", team.name);
        Ok(team.clone())
    }
}
