//! Seed data the mock backend starts with

use super::types::{Club, Event, Member, Team};

pub fn clubs() -> Vec<Club> {
    vec![
        Club::new(1, "Robotics Club", 245),
        Club::new(2, "Drama Society", 189).joined(),
        Club::new(3, "Music Club", 312).joined(),
        Club::new(4, "Literature Society", 156),
        Club::new(5, "Sports Club", 428),
        Club::new(6, "Art & Design", 203).joined(),
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event::new(1, "Tech Innovation Summit", "2024-01-15"),
        Event::new(2, "Cultural Night", "2024-01-22").rsvpd(),
        Event::new(3, "Career Fair 2024", "2024-01-28"),
    ]
}

pub fn teams() -> Vec<Team> {
    vec![
        team(
            1,
            "Robotics Squad",
            "CSE",
            "3rd",
            "🤖",
            &[("Aarav", "AI & ML"), ("Kavya", "Sensors & Circuits")],
        ),
        team(
            2,
            "Cultural Crew",
            "Humanities",
            "2nd",
            "🎭",
            &[("Rohan", "Dance"), ("Meera", "Music")],
        ),
        team(
            3,
            "Tech Ninjas",
            "IT",
            "1st",
            "💻",
            &[("Nitin", "Frontend"), ("Simran", "Backend")],
        ),
        team(
            4,
            "Sports Warriors",
            "Sports",
            "2nd",
            "🏆",
            &[("Kabir", "Football"), ("Tanya", "Athletics")],
        ),
    ]
}

pub(crate) fn team(
    id: u32,
    name: &str,
    stream: &str,
    year: &str,
    icon: &str,
    members: &[(&str, &str)],
) -> Team {
    Team {
        id,
        name: name.to_string(),
        stream: stream.to_string(),
        year: year.to_string(),
        icon: icon.to_string(),
        members: members
            .iter()
            .map(|(name, specialty)| Member::new(*name, *specialty))
            .collect(),
    }
}
