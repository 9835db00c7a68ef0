//! Component Renderer
//!
//! Turns a [`ViewState`] plus a snapshot of store data into [`Fragment`]s.
//! Each fragment belongs to one [`MountPoint`]; the renderer asks its
//! [`TargetRegistry`] before producing it and returns `None` when the
//! container is absent, so a page without a team grid simply gets no grid.

mod fragment;
mod targets;

pub use fragment::{
    AttendanceRow, ClubCard, Fragment, JoinButton, ProfileCard, RsvpButton, TeamCard, NO_TEAMS,
};
pub use targets::{MountPoint, MountPoints, TargetRegistry};

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::UiConfig;
use crate::state::{catalog, Modal, ViewState};
use crate::store::{Event, User};

pub const GUEST_NAME: &str = "Guest User";
pub const GUEST_EMAIL: &str = "guest@uniclubs.edu";

/// Everything a render pass reads
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub state: &'a ViewState,
    /// Events as last fetched from the store
    pub events: &'a [Event],
    pub user: Option<&'a User>,
    pub now: Instant,
}

#[derive(Clone)]
pub struct ComponentRenderer {
    targets: Arc<dyn TargetRegistry>,
    typing_char: Duration,
}

impl ComponentRenderer {
    pub fn new(targets: Arc<dyn TargetRegistry>, ui: &UiConfig) -> Self {
        Self {
            targets,
            typing_char: Duration::from_millis(ui.typing_char_ms),
        }
    }

    pub fn targets(&self) -> &Arc<dyn TargetRegistry> {
        &self.targets
    }

    fn mounted(&self, mount: MountPoint) -> bool {
        let present = self.targets.has_target(&mount);
        if !present {
            tracing::trace!(mount = %mount, "Mount point absent, skipping");
        }
        present
    }

    pub fn joined_clubs(&self, ctx: &RenderContext<'_>) -> Option<Fragment> {
        if !self.mounted(MountPoint::JoinedClubs) {
            return None;
        }

        let clubs: Vec<ClubCard> = ctx
            .state
            .joined_clubs()
            .iter()
            .map(|c| ClubCard {
                id: c.id,
                name: c.name.clone(),
                icon: c.icon.clone(),
                role: c.role.clone(),
                highlighted: ctx.state.is_new_club(c.id),
            })
            .collect();

        Some(Fragment::JoinedClubs {
            count: clubs.len(),
            clubs,
        })
    }

    pub fn team_grid(&self, ctx: &RenderContext<'_>) -> Option<Fragment> {
        if !self.mounted(MountPoint::TeamGrid) {
            return None;
        }

        let teams: Vec<TeamCard> = ctx
            .state
            .teams()
            .iter()
            .map(|t| TeamCard {
                id: t.id,
                name: t.name.clone(),
                stream: t.stream.clone(),
                year: t.year.clone(),
                icon: t.icon.clone(),
                members: t.members.clone(),
                highlighted: ctx.state.is_new_team(t.id),
            })
            .collect();
        let empty_message = teams.is_empty().then_some(NO_TEAMS);

        Some(Fragment::TeamGrid {
            teams,
            empty_message,
        })
    }

    /// One button per known event. A recorded choice wins over the store flag.
    pub fn rsvp_buttons(&self, ctx: &RenderContext<'_>) -> Option<Fragment> {
        if !self.mounted(MountPoint::RsvpButtons) {
            return None;
        }

        let buttons = ctx
            .events
            .iter()
            .map(|e| {
                let rsvpd = ctx.state.rsvp(e.id).unwrap_or(e.rsvpd);
                RsvpButton {
                    event_id: e.id,
                    title: e.title.clone(),
                    date: e.date.clone(),
                    rsvpd,
                    label: if rsvpd { "Joined ✓" } else { "RSVP" },
                }
            })
            .collect();

        Some(Fragment::RsvpButtons { buttons })
    }

    /// Labels for whichever club join buttons are on the page
    pub fn join_buttons(&self, ctx: &RenderContext<'_>) -> Option<Fragment> {
        let buttons: Vec<JoinButton> = catalog::CLUBS
            .iter()
            .filter(|c| self.targets.has_target(&MountPoint::JoinButton(c.id)))
            .map(|c| {
                let joined = ctx.state.is_club_joined(c.id);
                JoinButton {
                    club_id: c.id,
                    joined,
                    label: if joined { "Unjoin" } else { "Join Club" },
                }
            })
            .collect();

        if buttons.is_empty() {
            return None;
        }
        Some(Fragment::JoinButtons { buttons })
    }

    pub fn profile(&self, ctx: &RenderContext<'_>) -> Option<Fragment> {
        if !self.mounted(MountPoint::Profile) {
            return None;
        }

        let (name, email) = match ctx.user {
            Some(user) => (user.name.clone(), user.email.clone()),
            None => (GUEST_NAME.to_string(), GUEST_EMAIL.to_string()),
        };

        Some(Fragment::Profile(ProfileCard {
            name,
            email,
            signed_in: ctx.user.is_some(),
            login_label: if ctx.user.is_some() { "Logout" } else { "Login" },
            dropdown_open: ctx.state.dropdown_open(),
            club_count: ctx.state.joined_clubs().len(),
        }))
    }

    pub fn attendance(&self, ctx: &RenderContext<'_>) -> Option<Fragment> {
        if !self.mounted(MountPoint::Attendance) {
            return None;
        }

        let entries = ctx
            .state
            .attendance()
            .iter()
            .map(|e| AttendanceRow {
                event_id: e.event_id,
                event_name: e.event_name.clone(),
                location: e.location.clone(),
                date: e.date(),
                time: e.time(),
                status: e.status.clone(),
            })
            .collect();

        Some(Fragment::Attendance { entries })
    }

    /// The open team chat, if any
    pub fn chat_window(&self, ctx: &RenderContext<'_>) -> Option<Fragment> {
        let Some(Modal::TeamChat { team_id }) = ctx.state.modal() else {
            return None;
        };
        if !self.mounted(MountPoint::ChatWindow) {
            return None;
        }

        let team = ctx.state.team(team_id)?;
        let chat = ctx.state.chat(team_id)?;

        Some(Fragment::ChatWindow {
            team_id,
            team_name: team.name.clone(),
            lines: chat.reveal(ctx.now, self.typing_char),
        })
    }

    /// Every fragment whose target is mounted
    pub fn render_all(&self, ctx: &RenderContext<'_>) -> Vec<Fragment> {
        [
            self.joined_clubs(ctx),
            self.team_grid(ctx),
            self.rsvp_buttons(ctx),
            self.join_buttons(ctx),
            self.profile(ctx),
            self.attendance(ctx),
            self.chat_window(ctx),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
