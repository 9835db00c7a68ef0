//! Mount points and the registry that reports which ones exist

use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;

use crate::state::catalog;

/// A named container a fragment can be drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    /// Profile list of joined clubs
    JoinedClubs,
    TeamGrid,
    RsvpButtons,
    /// Join button on a club card, keyed by its `data-club-id`
    JoinButton(u32),
    Profile,
    Attendance,
    ChatWindow,
}

impl MountPoint {
    pub fn selector(&self) -> String {
        match self {
            MountPoint::JoinedClubs => "#joined-clubs-container".to_string(),
            MountPoint::TeamGrid => "#teams-root".to_string(),
            MountPoint::RsvpButtons => "#rsvp-buttons-root".to_string(),
            MountPoint::JoinButton(id) => format!(".btn-join[data-club-id=\"{}\"]", id),
            MountPoint::Profile => "#profile-root".to_string(),
            MountPoint::Attendance => "#attendance-root".to_string(),
            MountPoint::ChatWindow => "#chat-root".to_string(),
        }
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// Answers whether a mount point is present in the host page
pub trait TargetRegistry: Send + Sync {
    fn has_target(&self, mount: &MountPoint) -> bool;
}

/// Mutable set of mounted targets
#[derive(Debug, Default)]
pub struct MountPoints {
    mounted: RwLock<HashSet<MountPoint>>,
}

impl MountPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every container of the portal page, with a join button per catalog club
    pub fn full_page() -> Self {
        let mut mounted: HashSet<MountPoint> = [
            MountPoint::JoinedClubs,
            MountPoint::TeamGrid,
            MountPoint::RsvpButtons,
            MountPoint::Profile,
            MountPoint::Attendance,
            MountPoint::ChatWindow,
        ]
        .into_iter()
        .collect();
        mounted.extend(catalog::CLUBS.iter().map(|c| MountPoint::JoinButton(c.id)));

        Self {
            mounted: RwLock::new(mounted),
        }
    }

    pub fn mount(&self, mount: MountPoint) {
        self.mounted.write().insert(mount);
    }

    pub fn unmount(&self, mount: &MountPoint) -> bool {
        self.mounted.write().remove(mount)
    }

    /// Mounted join buttons, ordered by club id
    pub fn join_buttons(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .mounted
            .read()
            .iter()
            .filter_map(|m| match m {
                MountPoint::JoinButton(id) => Some(*id),
                _ => None,
            })
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl TargetRegistry for MountPoints {
    fn has_target(&self, mount: &MountPoint) -> bool {
        self.mounted.read().contains(mount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_and_unmount() {
        let targets = MountPoints::new();
        assert!(!targets.has_target(&MountPoint::TeamGrid));

        targets.mount(MountPoint::TeamGrid);
        assert!(targets.has_target(&MountPoint::TeamGrid));
        assert!(targets.unmount(&MountPoint::TeamGrid));
        assert!(!targets.has_target(&MountPoint::TeamGrid));
    }

    #[test]
    fn test_full_page_join_buttons() {
        let targets = MountPoints::full_page();
        assert_eq!(targets.join_buttons(), vec![1, 2, 3, 4, 5, 6]);
        assert!(targets.has_target(&MountPoint::JoinedClubs));
    }

    #[test]
    fn test_selectors() {
        assert_eq!(MountPoint::TeamGrid.selector(), "#teams-root");
        assert_eq!(
            MountPoint::JoinButton(4).to_string(),
            ".btn-join[data-club-id=\"4\"]"
        );
    }
}
