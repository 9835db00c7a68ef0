//! User interactions the portal reacts to

use serde::Deserialize;

use crate::notify::ToastId;
use crate::store::{MemberDraft, TeamDraft};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Location fragment changed, e.g. `#events`
    Navigate { fragment: String },
    Scroll { offset: u32 },

    // Account
    OpenLogin,
    Login { email: String, password: String },
    Logout,
    /// Login/logout item of the profile dropdown
    AccountMenu,
    ToggleDropdown,

    // Clubs
    /// Join/unjoin button on a club card
    ToggleClub { club_id: u32 },
    /// Join through the backend
    JoinClub { club_id: u32 },

    // Events
    ToggleRsvp { event_id: u32 },
    MarkAttendance { event_id: u32 },

    // Teams
    OpenAddTeam,
    CreateTeam { draft: TeamDraft },
    AddTeamMember { team_id: u32, member: MemberDraft },
    OpenChat { team_id: u32 },
    SendChat { text: String },

    /// Close button of the open overlay
    CloseModal,
    /// Escape key: close the overlay and clear the location fragment
    Escape,
    DismissToast { id: ToastId },
}

impl Action {
    pub fn navigate(fragment: impl Into<String>) -> Self {
        Action::Navigate {
            fragment: fragment.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::Scroll { .. } => "scroll",
            Action::OpenLogin => "open_login",
            Action::Login { .. } => "login",
            Action::Logout => "logout",
            Action::AccountMenu => "account_menu",
            Action::ToggleDropdown => "toggle_dropdown",
            Action::ToggleClub { .. } => "toggle_club",
            Action::JoinClub { .. } => "join_club",
            Action::ToggleRsvp { .. } => "toggle_rsvp",
            Action::MarkAttendance { .. } => "mark_attendance",
            Action::OpenAddTeam => "open_add_team",
            Action::CreateTeam { .. } => "create_team",
            Action::AddTeamMember { .. } => "add_team_member",
            Action::OpenChat { .. } => "open_chat",
            Action::SendChat { .. } => "send_chat",
            Action::CloseModal => "close_modal",
            Action::Escape => "escape",
            Action::DismissToast { .. } => "dismiss_toast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_actions() {
        let action: Action = serde_json::from_str(r##"{"type":"navigate","fragment":"#clubs"}"##).unwrap();
        assert_eq!(action, Action::navigate("#clubs"));

        let action: Action =
            serde_json::from_str(r#"{"type":"create_team","draft":{"name":"X","members":[{"name":"Y"}]}}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::CreateTeam {
                draft: TeamDraft::named("X").member(MemberDraft::new("Y"))
            }
        );

        let action: Action = serde_json::from_str(r#"{"type":"close_modal"}"#).unwrap();
        assert_eq!(action.name(), "close_modal");

        let action: Action = serde_json::from_str(r#"{"type":"escape"}"#).unwrap();
        assert_eq!(action, Action::Escape);
    }
}
