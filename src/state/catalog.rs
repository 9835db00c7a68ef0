//! Static client-side metadata and the initial view roster

use crate::store::seed::team;
use crate::store::Team;

/// Display data for a club
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogClub {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Where an event takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    pub event_id: u32,
    pub name: &'static str,
    pub location: &'static str,
}

pub const CLUBS: [CatalogClub; 6] = [
    CatalogClub { id: 1, name: "Robotics Club", icon: "🤖" },
    CatalogClub { id: 2, name: "Drama Society", icon: "🎭" },
    CatalogClub { id: 3, name: "Music Club", icon: "🎵" },
    CatalogClub { id: 4, name: "Literature Society", icon: "📚" },
    CatalogClub { id: 5, name: "Sports Club", icon: "⚽" },
    CatalogClub { id: 6, name: "Art & Design", icon: "🎨" },
];

pub const VENUES: [Venue; 3] = [
    Venue { event_id: 1, name: "Tech Innovation Summit", location: "Main Auditorium" },
    Venue { event_id: 2, name: "Cultural Night", location: "Student Center" },
    Venue { event_id: 3, name: "Career Fair 2024", location: "Sports Complex" },
];

/// Icons a new team can be given
pub const TEAM_ICONS: [&str; 16] = [
    "🚀", "🎓", "💡", "🏆", "🎯", "🌟", "🔥", "⚡", "🎮", "🎤", "🎸", "🎬", "📚", "🔬", "✈️", "🏋️",
];

/// Clubs the demo user starts in: (club id, role)
pub const INITIAL_MEMBERSHIPS: [(u32, &str); 3] = [(1, "Member"), (3, "Vice President"), (6, "Member")];

pub fn club(id: u32) -> Option<&'static CatalogClub> {
    CLUBS.iter().find(|c| c.id == id)
}

/// Venue for an event, falling back to the first event for unknown ids
pub fn venue(event_id: u32) -> &'static Venue {
    VENUES
        .iter()
        .find(|v| v.event_id == event_id)
        .unwrap_or(&VENUES[0])
}

pub fn roster() -> Vec<Team> {
    vec![
        team(
            1,
            "Robotics Squad",
            "CSE",
            "3rd Year",
            "🤖",
            &[
                ("Alex Chen", "AI & Machine Learning"),
                ("Sarah Williams", "Hardware Design"),
                ("Mike Johnson", "Software Engineering"),
            ],
        ),
        team(
            2,
            "Cultural Crew",
            "Humanities",
            "2nd Year",
            "🎭",
            &[("Priya Sharma", "Event Coordination"), ("David Lee", "Choreography")],
        ),
        team(
            3,
            "Tech Ninjas",
            "IT",
            "1st Year",
            "💻",
            &[
                ("Emma Davis", "Web Development"),
                ("Chris Taylor", "Cybersecurity"),
                ("Lisa Anderson", "Database Management"),
            ],
        ),
        team(
            4,
            "Sports Warriors",
            "Sports",
            "2nd Year",
            "⚽",
            &[("Jason Smith", "Team Captain"), ("Maria Garcia", "Fitness Coach")],
        ),
        team(
            5,
            "Design Masters",
            "Design",
            "3rd Year",
            "🎨",
            &[
                ("Sophia Brown", "UI/UX Design"),
                ("Oliver White", "Graphic Design"),
                ("Ava Martinez", "3D Modeling"),
            ],
        ),
        team(
            6,
            "Music Legends",
            "Music",
            "4th Year",
            "🎵",
            &[
                ("Noah Wilson", "Vocals"),
                ("Isabella Thomas", "Guitar"),
                ("Ethan Moore", "Drums"),
            ],
        ),
    ]
}
