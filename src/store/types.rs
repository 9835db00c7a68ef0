//! Core data types for the portal
//!
//! - `Club`, `Event`, `Team`, `Member`: records held by the store
//! - `User`: the single signed-in user
//! - `TeamDraft` and `MemberDraft`: loosely filled form input, resolved
//!   against `TeamDefaults` when a record is created

use serde::{Deserialize, Serialize};

/// A student club
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Club {
    pub id: u32,
    pub name: String,
    /// Never decremented; leaving a club is a client-side operation
    pub member_count: u32,
    pub joined: bool,
}

impl Club {
    pub fn new(id: u32, name: impl Into<String>, member_count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            member_count,
            joined: false,
        }
    }

    /// Builder method: mark as joined
    pub fn joined(mut self) -> Self {
        self.joined = true;
        self
    }
}

/// A campus event that can be RSVP'd to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub rsvpd: bool,
}

impl Event {
    pub fn new(id: u32, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            rsvpd: false,
        }
    }

    /// Builder method: mark as RSVP'd
    pub fn rsvpd(mut self) -> Self {
        self.rsvpd = true;
        self
    }
}

/// A team member. Identified only by position in its team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub specialty: String,
}

impl Member {
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

/// A project or activity team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub stream: String,
    pub year: String,
    pub icon: String,
    pub members: Vec<Member>,
}

/// The signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    /// Derive a user from an email address; the display name is the local part
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or_default();
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Default values applied to blank draft fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDefaults {
    pub name: &'static str,
    pub stream: &'static str,
    pub year: &'static str,
    pub icon: &'static str,
    pub member_name: &'static str,
    pub member_specialty: &'static str,
}

impl TeamDefaults {
    pub const STANDARD: TeamDefaults = TeamDefaults {
        name: "Untitled Team",
        stream: "Unknown",
        year: "N/A",
        icon: "👥",
        member_name: "Unnamed Member",
        member_specialty: "General",
    };
}

impl Default for TeamDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Member form input. Blank fields fall back to `TeamDefaults`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
}

impl MemberDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            specialty: None,
        }
    }

    /// Builder method: set specialty
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// True when neither field carries any text
    pub fn is_blank(&self) -> bool {
        filled(&self.name).is_none() && filled(&self.specialty).is_none()
    }

    pub fn resolve(&self, defaults: &TeamDefaults) -> Member {
        Member {
            name: filled(&self.name).unwrap_or(defaults.member_name).to_string(),
            specialty: filled(&self.specialty)
                .unwrap_or(defaults.member_specialty)
                .to_string(),
        }
    }
}

/// Team form input. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberDraft>,
}

impl TeamDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Builder method: set stream
    pub fn stream(mut self, stream: impl Into<String>) -> Self {
        self.stream = Some(stream.into());
        self
    }

    /// Builder method: set year
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Builder method: set icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder method: add a member
    pub fn member(mut self, member: MemberDraft) -> Self {
        self.members.push(member);
        self
    }

    /// Build a team with the given id. Fully blank member rows are dropped.
    pub fn resolve(&self, id: u32, defaults: &TeamDefaults) -> Team {
        Team {
            id,
            name: filled(&self.name).unwrap_or(defaults.name).to_string(),
            stream: filled(&self.stream).unwrap_or(defaults.stream).to_string(),
            year: filled(&self.year).unwrap_or(defaults.year).to_string(),
            icon: filled(&self.icon).unwrap_or(defaults.icon).to_string(),
            members: self
                .members
                .iter()
                .filter(|m| !m.is_blank())
                .map(|m| m.resolve(defaults))
                .collect(),
        }
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Next free id in a collection: one past the largest id in use
pub fn next_id<'a>(ids: impl IntoIterator<Item = &'a u32>) -> u32 {
    ids.into_iter().copied().max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_email() {
        let user = User::from_email("a@b.edu");
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.edu");

        let user = User::from_email("no-at-sign");
        assert_eq!(user.name, "no-at-sign");
    }

    #[test]
    fn test_empty_draft_uses_defaults() {
        let team = TeamDraft::new().resolve(7, &TeamDefaults::STANDARD);
        assert_eq!(team.id, 7);
        assert_eq!(team.name, "Untitled Team");
        assert_eq!(team.stream, "Unknown");
        assert_eq!(team.year, "N/A");
        assert_eq!(team.icon, "👥");
        assert!(team.members.is_empty());
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let draft = TeamDraft {
            name: Some("   ".to_string()),
            stream: Some(String::new()),
            ..Default::default()
        };
        let team = draft.resolve(1, &TeamDefaults::STANDARD);
        assert_eq!(team.name, "Untitled Team");
        assert_eq!(team.stream, "Unknown");
    }

    #[test]
    fn test_blank_member_rows_dropped() {
        let draft = TeamDraft::named("Rocketry")
            .member(MemberDraft::default())
            .member(MemberDraft::new("Ada"))
            .member(MemberDraft {
                name: None,
                specialty: Some("Propulsion".to_string()),
            });

        let team = draft.resolve(1, &TeamDefaults::STANDARD);
        assert_eq!(
            team.members,
            vec![
                Member::new("Ada", "General"),
                Member::new("Unnamed Member", "Propulsion"),
            ]
        );
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(std::iter::empty::<&u32>()), 1);
        assert_eq!(next_id(&[1, 5, 3]), 6);
    }
}
