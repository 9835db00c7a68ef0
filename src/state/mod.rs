//! View State
//!
//! Client-side state of the portal: joined clubs, RSVP choices, the team
//! roster, the attendance log and which overlay is open. Mutators are
//! synchronous and return the [`Notice`] the caller should show; they never
//! touch the notification queue themselves.
//!
//! The roster is authoritative on the client and starts from its own seed,
//! independent of the store's teams.

pub mod attendance;
pub mod catalog;
pub mod chat;

pub use attendance::{AttendanceEntry, AttendanceLog};
pub use chat::{Author, ChatTranscript, RevealedLine};

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tokio::time::Instant;

use crate::notify::Notice;
use crate::store::{next_id, MemberDraft, StoreError, StoreResult, Team, TeamDefaults, TeamDraft};

/// A club the user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedClub {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub role: String,
}

/// Overlay currently covering the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Modal {
    Login { pending: bool },
    AddTeam,
    TeamChat { team_id: u32 },
}

#[derive(Debug, Clone)]
pub struct ViewState {
    joined: Vec<JoinedClub>,
    rsvps: BTreeMap<u32, bool>,
    teams: Vec<Team>,
    attendance: AttendanceLog,
    new_clubs: HashSet<u32>,
    new_teams: HashSet<u32>,
    modal: Option<Modal>,
    dropdown_open: bool,
    chats: HashMap<u32, ChatTranscript>,
    defaults: TeamDefaults,
}

impl ViewState {
    /// State as the portal first shows it
    pub fn new() -> Self {
        let joined = catalog::INITIAL_MEMBERSHIPS
            .iter()
            .filter_map(|(id, role)| {
                catalog::club(*id).map(|club| JoinedClub {
                    id: club.id,
                    name: club.name.to_string(),
                    icon: club.icon.to_string(),
                    role: role.to_string(),
                })
            })
            .collect();

        Self {
            joined,
            teams: catalog::roster(),
            ..Self::empty()
        }
    }

    /// No memberships, no teams
    pub fn empty() -> Self {
        Self {
            joined: Vec::new(),
            rsvps: BTreeMap::new(),
            teams: Vec::new(),
            attendance: AttendanceLog::default(),
            new_clubs: HashSet::new(),
            new_teams: HashSet::new(),
            modal: None,
            dropdown_open: false,
            chats: HashMap::new(),
            defaults: TeamDefaults::STANDARD,
        }
    }

    // ----- Clubs -----

    pub fn joined_clubs(&self) -> &[JoinedClub] {
        &self.joined
    }

    pub fn is_club_joined(&self, club_id: u32) -> bool {
        self.joined.iter().any(|c| c.id == club_id)
    }

    /// Leave the club if joined, join it otherwise
    pub fn toggle_club_membership(&mut self, club_id: u32) -> StoreResult<Notice> {
        if let Some(pos) = self.joined.iter().position(|c| c.id == club_id) {
            self.joined.remove(pos);
            self.new_clubs.remove(&club_id);
            tracing::info!(club_id, "Left club");
            return Ok(Notice::info("You have left the club."));
        }

        let club = catalog::club(club_id).ok_or_else(|| StoreError::club(club_id))?;
        self.mark_club_joined(club_id)?;

        Ok(Notice::success(format!(
            "Successfully joined {}! Check your profile.",
            club.name
        )))
    }

    /// Add a club as a plain member and highlight it
    ///
    /// Returns false if the user already belonged to it.
    pub fn mark_club_joined(&mut self, club_id: u32) -> StoreResult<bool> {
        if self.is_club_joined(club_id) {
            return Ok(false);
        }

        let club = catalog::club(club_id).ok_or_else(|| StoreError::club(club_id))?;
        self.joined.push(JoinedClub {
            id: club.id,
            name: club.name.to_string(),
            icon: club.icon.to_string(),
            role: "Member".to_string(),
        });
        self.new_clubs.insert(club_id);

        tracing::info!(club_id, club = club.name, "Joined club");
        Ok(true)
    }

    pub fn is_new_club(&self, club_id: u32) -> bool {
        self.new_clubs.contains(&club_id)
    }

    pub fn clear_new_club(&mut self, club_id: u32) {
        self.new_clubs.remove(&club_id);
    }

    // ----- Events -----

    pub fn set_rsvp(&mut self, event_id: u32, desired: bool) -> Notice {
        self.rsvps.insert(event_id, desired);
        tracing::info!(event_id, rsvpd = desired, "RSVP recorded");

        if desired {
            Notice::success("RSVP successful! Check Attendance page for event details.")
        } else {
            Notice::info("RSVP cancelled.")
        }
    }

    /// Recorded RSVP choice, `None` if the user never chose
    pub fn rsvp(&self, event_id: u32) -> Option<bool> {
        self.rsvps.get(&event_id).copied()
    }

    pub fn rsvps(&self) -> &BTreeMap<u32, bool> {
        &self.rsvps
    }

    pub fn mark_attendance(&mut self, event_id: u32, at: NaiveDateTime) -> Notice {
        let entry = self.attendance.record(AttendanceEntry::new(event_id, at));
        tracing::info!(event_id, event = %entry.event_name, "Attendance marked");
        Notice::success(entry.confirmation())
    }

    pub fn attendance(&self) -> &[AttendanceEntry] {
        self.attendance.entries()
    }

    // ----- Teams -----

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Add a team with a random icon from the palette
    ///
    /// Blank fields take the store's [`TeamDefaults`] ("Untitled Team",
    /// "Unknown", "N/A"), so a team reads the same on both sides.
    /// Closes the add-team modal if it is open.
    pub fn create_team<R: Rng + ?Sized>(&mut self, draft: &TeamDraft, rng: &mut R) -> (Team, Notice) {
        let id = next_id(self.teams.iter().map(|t| &t.id));
        let mut team = draft.resolve(id, &self.defaults);
        if let Some(icon) = catalog::TEAM_ICONS.choose(rng) {
            team.icon = icon.to_string();
        }

        self.teams.push(team.clone());
        self.new_teams.insert(id);
        if self.modal == Some(Modal::AddTeam) {
            self.modal = None;
        }

        tracing::info!(team_id = id, name = %team.name, members = team.members.len(), "Team created");
        let notice = Notice::success(format!("Team \"{}\" created successfully!", team.name));
        (team, notice)
    }

    pub fn add_team_member(&mut self, team_id: u32, draft: &MemberDraft) -> StoreResult<Notice> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| StoreError::team(team_id))?;

        let member = draft.resolve(&self.defaults);
        let notice = Notice::success(format!("{} joined {}!", member.name, team.name));
        team.members.push(member);

        tracing::info!(team_id, members = team.members.len(), "Team member added");
        Ok(notice)
    }

    pub fn is_new_team(&self, team_id: u32) -> bool {
        self.new_teams.contains(&team_id)
    }

    pub fn clear_new_team(&mut self, team_id: u32) {
        self.new_teams.remove(&team_id);
    }

    // ----- Overlays -----

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn open_login(&mut self) {
        self.modal = Some(Modal::Login { pending: false });
        self.dropdown_open = false;
    }

    /// Flag the login modal as submitting. Returns false if it is not open.
    pub fn begin_login(&mut self) -> bool {
        match self.modal {
            Some(Modal::Login { .. }) => {
                self.modal = Some(Modal::Login { pending: true });
                true
            }
            _ => false,
        }
    }

    /// Close the login modal after a sign-in attempt settles
    pub fn finish_login(&mut self) {
        if matches!(self.modal, Some(Modal::Login { .. })) {
            self.modal = None;
        }
    }

    pub fn open_add_team(&mut self) {
        self.modal = Some(Modal::AddTeam);
    }

    /// Open a team's chat, starting its transcript on first use
    pub fn open_chat(&mut self, team_id: u32, now: Instant) -> StoreResult<()> {
        if self.team(team_id).is_none() {
            return Err(StoreError::team(team_id));
        }

        self.chats
            .entry(team_id)
            .or_insert_with(|| ChatTranscript::new(now));
        self.modal = Some(Modal::TeamChat { team_id });
        Ok(())
    }

    /// Post into the open chat. Ignored when no chat is open or text is blank.
    pub fn send_chat(&mut self, text: &str, now: Instant) -> bool {
        let Some(Modal::TeamChat { team_id }) = self.modal else {
            return false;
        };

        self.chats
            .get_mut(&team_id)
            .map(|chat| chat.send(text, now))
            .unwrap_or(false)
    }

    pub fn chat(&self, team_id: u32) -> Option<&ChatTranscript> {
        self.chats.get(&team_id)
    }

    /// Close whatever overlay is open
    pub fn close_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_initial_memberships() {
        let state = ViewState::new();
        let roles: Vec<_> = state
            .joined_clubs()
            .iter()
            .map(|c| (c.id, c.role.as_str()))
            .collect();
        assert_eq!(roles, vec![(1, "Member"), (3, "Vice President"), (6, "Member")]);
        assert_eq!(state.teams().len(), 6);
    }

    #[test]
    fn test_toggle_membership() {
        let mut state = ViewState::new();

        let notice = state.toggle_club_membership(2).unwrap();
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(notice.message, "Successfully joined Drama Society! Check your profile.");
        assert!(state.is_club_joined(2));
        assert!(state.is_new_club(2));
        assert_eq!(state.joined_clubs().last().unwrap().role, "Member");

        state.clear_new_club(2);
        assert!(!state.is_new_club(2));

        let notice = state.toggle_club_membership(2).unwrap();
        assert_eq!(notice.kind, ToastKind::Info);
        assert_eq!(notice.message, "You have left the club.");
        assert!(!state.is_club_joined(2));
    }

    #[test]
    fn test_mark_club_joined_once() {
        let mut state = ViewState::new();

        assert_eq!(state.mark_club_joined(3), Ok(false));
        assert!(!state.is_new_club(3));

        assert_eq!(state.mark_club_joined(5), Ok(true));
        assert_eq!(state.mark_club_joined(5), Ok(false));
        assert!(state.is_new_club(5));
        assert_eq!(state.joined_clubs().len(), 4);

        assert_eq!(state.mark_club_joined(77), Err(StoreError::club(77)));
    }

    #[test]
    fn test_toggle_unknown_club() {
        let mut state = ViewState::new();
        let before = state.joined_clubs().to_vec();

        let err = state.toggle_club_membership(99).unwrap_err();
        assert_eq!(err.to_string(), "Club not found");
        assert_eq!(state.joined_clubs(), before.as_slice());
    }

    #[test]
    fn test_set_rsvp() {
        let mut state = ViewState::new();
        assert_eq!(state.rsvp(1), None);

        let notice = state.set_rsvp(1, true);
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(state.rsvp(1), Some(true));

        let notice = state.set_rsvp(1, false);
        assert_eq!(notice.message, "RSVP cancelled.");
        assert_eq!(notice.kind, ToastKind::Info);
        assert_eq!(state.rsvp(1), Some(false));
    }

    #[test]
    fn test_mark_attendance() {
        let mut state = ViewState::new();
        let at = NaiveDate::from_ymd_opt(2024, 1, 28)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        state.mark_attendance(1, at);
        let notice = state.mark_attendance(3, at);

        assert_eq!(notice.kind, ToastKind::Success);
        assert!(notice.message.starts_with("Attendance marked for Career Fair 2024!\n"));
        assert!(notice.message.contains("Location: Sports Complex"));
        assert_eq!(state.attendance()[0].event_id, 3);
        assert_eq!(state.attendance()[1].event_id, 1);
    }

    #[test]
    fn test_create_team_defaults() {
        let mut state = ViewState::new();
        state.open_add_team();

        let (team, notice) = state.create_team(&TeamDraft::new(), &mut rng());
        assert_eq!(team.name, "Untitled Team");
        assert_eq!(team.stream, "Unknown");
        assert_eq!(team.year, "N/A");
        assert!(catalog::TEAM_ICONS.contains(&team.icon.as_str()));
        assert_eq!(team.id, 7);
        assert_eq!(notice.message, "Team \"Untitled Team\" created successfully!");

        assert!(state.is_new_team(team.id));
        assert_eq!(state.modal(), None);
        assert_eq!(state.teams().len(), 7);
    }

    #[test]
    fn test_create_team_ids_never_collide() {
        let mut state = ViewState::empty();
        let mut rng = rng();
        let mut ids = HashSet::new();
        for _ in 0..5 {
            let (team, _) = state.create_team(&TeamDraft::named("T"), &mut rng);
            assert!(ids.insert(team.id));
        }
    }

    #[test]
    fn test_create_team_drops_blank_members() {
        let mut state = ViewState::empty();
        let draft = TeamDraft::named("Quiz Crew")
            .member(MemberDraft::new("Ana"))
            .member(MemberDraft::default())
            .member(MemberDraft::default().specialty("Trivia"));

        let (team, _) = state.create_team(&draft, &mut rng());
        let names: Vec<_> = team.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Unnamed Member"]);
        assert_eq!(team.members[0].specialty, "General");
    }

    #[test]
    fn test_add_team_member() {
        let mut state = ViewState::new();

        let notice = state.add_team_member(2, &MemberDraft::new("Kim")).unwrap();
        assert_eq!(notice.message, "Kim joined Cultural Crew!");
        let team = state.team(2).unwrap();
        assert_eq!(team.members.len(), 3);
        assert_eq!(team.members[2].specialty, "General");

        let err = state.add_team_member(404, &MemberDraft::new("Kim")).unwrap_err();
        assert_eq!(err, StoreError::team(404));
    }

    #[test]
    fn test_login_modal_flow() {
        let mut state = ViewState::new();
        assert!(!state.begin_login());

        state.toggle_dropdown();
        state.open_login();
        assert!(!state.dropdown_open());
        assert!(state.begin_login());
        assert_eq!(state.modal(), Some(Modal::Login { pending: true }));

        state.finish_login();
        assert_eq!(state.modal(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_transcripts_are_per_team() {
        let mut state = ViewState::new();
        assert!(!state.send_chat("hello", Instant::now()));

        state.open_chat(1, Instant::now()).unwrap();
        assert!(state.send_chat("hello", Instant::now()));
        assert!(state.close_modal());

        state.open_chat(2, Instant::now()).unwrap();
        assert_eq!(state.chat(1).unwrap().lines().len(), 2);
        assert_eq!(state.chat(2).unwrap().lines().len(), 1);

        // Reopening keeps history
        state.open_chat(1, Instant::now()).unwrap();
        assert_eq!(state.chat(1).unwrap().lines().len(), 2);

        assert!(state.open_chat(99, Instant::now()).is_err());
        assert_eq!(state.modal(), Some(Modal::TeamChat { team_id: 1 }));
    }
}
