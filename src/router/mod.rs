//! Section Router
//!
//! Exactly one top-level section is visible at a time. Switching is a
//! two-step transition so the shell can animate it:
//!
//! ```text
//! begin(target)      every section hidden, loader shown
//!   └ transition_ms
//! activate()         target shown, nav highlight + scroll reset
//!   └ settle_ms
//! load hook runs     section data fetched
//!   └ loader_ms (from activation)
//! finish_loading()   loader hidden
//! ```
//!
//! Unknown targets leave the router untouched. A transition that has been
//! superseded by a newer `begin` is ignored when it tries to activate.

mod section;

pub use section::{LoadHook, Route, Section};

use serde::Serialize;

/// A section switch in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
    /// Bumped on every `begin`; identifies the latest transition
    pub sequence: u64,
}

impl Transition {
    pub fn hook(&self) -> LoadHook {
        self.to.load_hook()
    }
}

/// Router state as the shell needs to draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterView {
    pub active: Option<Section>,
    pub highlighted: Section,
    pub loading: bool,
    pub scroll_top: u32,
}

/// Which section is shown
#[derive(Debug, Clone)]
pub struct SectionRouter {
    current: Section,
    visible: bool,
    loading: bool,
    scroll_top: u32,
    sequence: u64,
    pending: Option<Transition>,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self {
            current: Section::Home,
            visible: true,
            loading: false,
            scroll_top: 0,
            sequence: 0,
            pending: None,
        }
    }

    /// Start switching to `target`. Returns `None` for an unknown section.
    pub fn begin(&mut self, target: &str) -> Option<Transition> {
        let to = match target.parse::<Section>() {
            Ok(section) => section,
            Err(_) => {
                tracing::debug!(section = %target, "Ignoring navigation to unknown section");
                return None;
            }
        };

        Some(self.begin_section(to))
    }

    /// Start switching to a known section
    pub fn begin_section(&mut self, to: Section) -> Transition {
        self.sequence += 1;
        let transition = Transition {
            from: self.current,
            to,
            sequence: self.sequence,
        };

        self.visible = false;
        self.loading = true;
        self.pending = Some(transition);

        tracing::debug!(from = %transition.from, to = %to, "Section transition started");
        transition
    }

    /// Show the target of `transition`, unless a newer one has started since
    pub fn activate(&mut self, transition: &Transition) -> bool {
        if self.pending.map(|p| p.sequence) != Some(transition.sequence) {
            tracing::trace!(to = %transition.to, "Stale transition skipped");
            return false;
        }

        self.current = transition.to;
        self.visible = true;
        self.scroll_top = 0;
        self.pending = None;
        true
    }

    /// Hide the loader if `transition` is still the latest one
    pub fn finish_loading(&mut self, transition: &Transition) {
        if transition.sequence == self.sequence {
            self.loading = false;
        }
    }

    /// Record a viewport scroll
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_top = offset;
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// The visible section, `None` mid-transition
    pub fn active(&self) -> Option<Section> {
        self.visible.then_some(self.current)
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active() == Some(section)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    pub fn view(&self) -> RouterView {
        RouterView {
            active: self.active(),
            highlighted: self.current,
            loading: self.loading,
            scroll_top: self.scroll_top,
        }
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let router = SectionRouter::new();
        assert_eq!(router.current(), Section::Home);
        assert!(router.is_active(Section::Home));
        assert!(!router.is_loading());
    }

    #[test]
    fn test_full_transition() {
        let mut router = SectionRouter::new();
        router.scroll_to(640);

        let transition = router.begin("clubs").unwrap();
        assert_eq!(transition.from, Section::Home);
        assert_eq!(transition.to, Section::Clubs);
        assert_eq!(transition.hook(), LoadHook::LoadClubs);

        // Everything hidden mid-transition
        assert_eq!(router.active(), None);
        assert!(router.is_loading());

        assert!(router.activate(&transition));
        assert!(router.is_active(Section::Clubs));
        assert_eq!(router.scroll_top(), 0);
        assert!(router.is_loading());

        router.finish_loading(&transition);
        assert!(!router.is_loading());
    }

    #[test]
    fn test_unknown_section_is_noop() {
        let mut router = SectionRouter::new();
        let transition = router.begin("events").unwrap();
        router.activate(&transition);
        router.finish_loading(&transition);
        router.scroll_to(10);

        assert!(router.begin("nowhere").is_none());
        assert!(router.is_active(Section::Events));
        assert!(!router.is_loading());
        assert_eq!(router.scroll_top(), 10);
    }

    #[test]
    fn test_superseded_transition_is_ignored() {
        let mut router = SectionRouter::new();

        let first = router.begin("teams").unwrap();
        let second = router.begin("profile").unwrap();
        assert_eq!(second.from, Section::Home);

        assert!(!router.activate(&first));
        assert_eq!(router.active(), None);

        assert!(router.activate(&second));
        router.finish_loading(&first);
        assert!(router.is_loading());
        router.finish_loading(&second);

        assert_eq!(
            router.view(),
            RouterView {
                active: Some(Section::Profile),
                highlighted: Section::Profile,
                loading: false,
                scroll_top: 0,
            }
        );
    }

    #[test]
    fn test_fragment_with_hash() {
        let mut router = SectionRouter::new();
        let transition = router.begin("#attendance").unwrap();
        assert_eq!(transition.to, Section::Attendance);
    }
}
