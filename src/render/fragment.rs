//! Rendered UI fragments

use serde::Serialize;
use std::fmt;

use crate::state::{Author, RevealedLine};
use crate::store::Member;

pub const NO_TEAMS: &str = "No teams found. Click + to create one!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubCard {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub role: String,
    /// Glow shown right after joining
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    pub id: u32,
    pub name: String,
    pub stream: String,
    pub year: String,
    pub icon: String,
    pub members: Vec<Member>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpButton {
    pub event_id: u32,
    pub title: String,
    pub date: String,
    pub rsvpd: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinButton {
    pub club_id: u32,
    pub joined: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub email: String,
    pub signed_in: bool,
    /// Label of the login/logout item in the dropdown
    pub login_label: &'static str,
    pub dropdown_open: bool,
    pub club_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRow {
    pub event_id: u32,
    pub event_name: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

/// Output of one render pass for one mount point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "fragment", rename_all = "snake_case")]
pub enum Fragment {
    JoinedClubs {
        count: usize,
        clubs: Vec<ClubCard>,
    },
    TeamGrid {
        teams: Vec<TeamCard>,
        #[serde(skip_serializing_if = "Option::is_none")]
        empty_message: Option<&'static str>,
    },
    RsvpButtons {
        buttons: Vec<RsvpButton>,
    },
    JoinButtons {
        buttons: Vec<JoinButton>,
    },
    Profile(ProfileCard),
    Attendance {
        entries: Vec<AttendanceRow>,
    },
    ChatWindow {
        team_id: u32,
        team_name: String,
        lines: Vec<RevealedLine>,
    },
}

impl Fragment {
    pub fn name(&self) -> &'static str {
        match self {
            Fragment::JoinedClubs { .. } => "joined_clubs",
            Fragment::TeamGrid { .. } => "team_grid",
            Fragment::RsvpButtons { .. } => "rsvp_buttons",
            Fragment::JoinButtons { .. } => "join_buttons",
            Fragment::Profile(_) => "profile",
            Fragment::Attendance { .. } => "attendance",
            Fragment::ChatWindow { .. } => "chat_window",
        }
    }
}

/// Plain-text rendering used by the CLI
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::JoinedClubs { count, clubs } => {
                writeln!(f, "My Clubs ({})", count)?;
                for club in clubs {
                    let glow = if club.highlighted { " *" } else { "" };
                    writeln!(f, "  {} {} - {}{}", club.icon, club.name, club.role, glow)?;
                }
            }
            Fragment::TeamGrid {
                teams,
                empty_message,
            } => {
                if let Some(message) = empty_message {
                    writeln!(f, "{}", message)?;
                }
                for team in teams {
                    let glow = if team.highlighted { " *" } else { "" };
                    writeln!(
                        f,
                        "[{}] {} {} ({}, {}){}",
                        team.id, team.icon, team.name, team.stream, team.year, glow
                    )?;
                    for member in &team.members {
                        writeln!(f, "      {} - {}", member.name, member.specialty)?;
                    }
                }
            }
            Fragment::RsvpButtons { buttons } => {
                for b in buttons {
                    writeln!(f, "[{}] {} ({})  <{}>", b.event_id, b.title, b.date, b.label)?;
                }
            }
            Fragment::JoinButtons { buttons } => {
                for b in buttons {
                    writeln!(f, "club {}: <{}>", b.club_id, b.label)?;
                }
            }
            Fragment::Profile(profile) => {
                writeln!(f, "{} <{}>", profile.name, profile.email)?;
                writeln!(f, "  clubs joined: {}", profile.club_count)?;
                writeln!(f, "  menu: {}", profile.login_label)?;
            }
            Fragment::Attendance { entries } => {
                if entries.is_empty() {
                    writeln!(f, "No attendance recorded yet.")?;
                }
                for e in entries {
                    writeln!(f, "{} @ {} on {} {}", e.event_name, e.location, e.date, e.time)?;
                    writeln!(f, "  {}", e.status)?;
                }
            }
            Fragment::ChatWindow {
                team_name, lines, ..
            } => {
                writeln!(f, "{} Chat", team_name)?;
                for line in lines {
                    let who = match line.author {
                        Author::Me => "me",
                        Author::System => "system",
                    };
                    let typing = if line.typing { " typing..." } else { "" };
                    writeln!(f, "  {}: {}{}", who, line.text, typing)?;
                }
            }
        }
        Ok(())
    }
}
