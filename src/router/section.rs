//! Section identifiers and URL fragment parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level content view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Clubs,
    Events,
    Teams,
    Profile,
    Attendance,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Clubs,
            Section::Events,
            Section::Teams,
            Section::Profile,
            Section::Attendance,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Clubs => "clubs",
            Section::Events => "events",
            Section::Teams => "teams",
            Section::Profile => "profile",
            Section::Attendance => "attendance",
        }
    }

    /// Location fragment that selects this section, e.g. `#clubs`
    pub fn fragment(&self) -> String {
        format!("#{}", self.as_str())
    }

    /// Data refresh to run once the section is shown
    pub fn load_hook(&self) -> LoadHook {
        match self {
            Section::Home => LoadHook::RefreshStats,
            Section::Clubs => LoadHook::LoadClubs,
            Section::Events => LoadHook::LoadEvents,
            Section::Teams => LoadHook::LoadTeams,
            Section::Profile => LoadHook::LoadProfile,
            Section::Attendance => LoadHook::LoadAttendance,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('#');
        Section::all()
            .iter()
            .copied()
            .find(|section| section.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("Unknown section: {}", name))
    }
}

/// Section-specific work dispatched after a transition settles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadHook {
    RefreshStats,
    LoadClubs,
    LoadEvents,
    LoadTeams,
    LoadProfile,
    LoadAttendance,
}

/// What a location fragment points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Section(Section),
    /// `#login` opens the sign-in modal on top of the current section
    Login,
    Unknown(String),
}

impl Route {
    /// Interpret a location fragment. An empty fragment means home.
    pub fn from_fragment(fragment: &str) -> Self {
        let name = fragment.trim().trim_start_matches('#');

        if name.is_empty() {
            return Route::Section(Section::Home);
        }
        if name.eq_ignore_ascii_case("login") {
            return Route::Login;
        }

        name.parse()
            .map(Route::Section)
            .unwrap_or_else(|_| Route::Unknown(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections() {
        assert_eq!("clubs".parse::<Section>(), Ok(Section::Clubs));
        assert_eq!("#Teams".parse::<Section>(), Ok(Section::Teams));
        assert!("settings".parse::<Section>().is_err());

        for section in Section::all() {
            assert_eq!(section.fragment().parse::<Section>(), Ok(*section));
        }
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::from_fragment(""), Route::Section(Section::Home));
        assert_eq!(Route::from_fragment("#"), Route::Section(Section::Home));
        assert_eq!(Route::from_fragment("#login"), Route::Login);
        assert_eq!(Route::from_fragment("#profile"), Route::Section(Section::Profile));
        assert_eq!(
            Route::from_fragment("#gallery"),
            Route::Unknown("gallery".to_string())
        );
    }

    #[test]
    fn test_hooks() {
        assert_eq!(Section::Home.load_hook(), LoadHook::RefreshStats);
        assert_eq!(Section::Attendance.load_hook(), LoadHook::LoadAttendance);
    }
}
