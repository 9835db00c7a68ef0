//! Portal
//!
//! The application object. It owns the backend handle, the view state, the
//! section router, the toast queue and the renderer, and turns each
//! [`Action`] into calls on them. Backend failures never escape: they become
//! error toasts and leave state as it was.
//!
//! Cloning a `Portal` yields another handle onto the same state; timers
//! (highlight windows, toast expiry) run on spawned tasks holding such a
//! handle. Every change is re-rendered and published on a broadcast channel.

mod action;

pub use action::Action;

use chrono::Local;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::Instant;

use crate::config::Config;
use crate::notify::{NotificationCenter, Notice, ToastEvent};
use crate::render::{ComponentRenderer, Fragment, MountPoints, RenderContext, TargetRegistry};
use crate::router::{LoadHook, Route, RouterView, Section, SectionRouter};
use crate::state::ViewState;
use crate::store::{Club, ClubsApi, DataStore, Event, MemberDraft, StoreError, Team, TeamDraft, User};

/// Store data as last fetched by a load hook
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub clubs: Vec<Club>,
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
}

/// Home page counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortalStats {
    pub clubs: usize,
    pub events: usize,
    pub teams: usize,
    pub joined_clubs: usize,
}

#[derive(Clone)]
pub struct Portal {
    api: Arc<dyn ClubsApi>,
    view: Arc<RwLock<ViewState>>,
    router: Arc<RwLock<SectionRouter>>,
    snapshot: Arc<RwLock<Snapshot>>,
    notifications: NotificationCenter,
    renderer: ComponentRenderer,
    fragments_tx: broadcast::Sender<Fragment>,
    config: Arc<Config>,
}

impl Portal {
    pub fn new(api: Arc<dyn ClubsApi>, targets: Arc<dyn TargetRegistry>, config: Config) -> Self {
        let (fragments_tx, _) = broadcast::channel(config.notifications.broadcast_capacity.max(1));

        Self {
            api,
            view: Arc::new(RwLock::new(ViewState::new())),
            router: Arc::new(RwLock::new(SectionRouter::new())),
            snapshot: Arc::new(RwLock::new(Snapshot::default())),
            notifications: NotificationCenter::new(config.notifications.clone()),
            renderer: ComponentRenderer::new(targets, &config.ui),
            fragments_tx,
            config: Arc::new(config),
        }
    }

    /// Portal over a fresh in-memory store with every mount point present
    pub fn with_store(config: Config) -> Self {
        let store = DataStore::new(config.latency.clone());
        Self::new(Arc::new(store), Arc::new(MountPoints::full_page()), config)
    }

    /// Fetch every collection once and publish the first render
    pub async fn init(&self) {
        let (clubs, events, teams) = tokio::join!(
            self.api.list_clubs(),
            self.api.list_events(),
            self.api.list_teams()
        );

        *self.snapshot.write() = Snapshot {
            clubs,
            events,
            teams,
        };

        tracing::info!("Portal initialized");
        self.publish();
    }

    /// Apply one interaction
    pub async fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.name(), "Dispatching action");

        match action {
            Action::Navigate { fragment } => self.navigate(&fragment).await,
            Action::Scroll { offset } => {
                self.router.write().scroll_to(offset);
            }

            Action::OpenLogin => self.update_view(|view| view.open_login()),
            Action::Login { email, password } => self.login(&email, &password).await,
            Action::Logout => self.logout().await,
            Action::AccountMenu => {
                if self.api.current_user().is_some() {
                    self.logout().await;
                } else {
                    self.update_view(|view| view.open_login());
                }
            }
            Action::ToggleDropdown => self.update_view(|view| {
                view.toggle_dropdown();
            }),

            Action::ToggleClub { club_id } => self.toggle_club(club_id),
            Action::JoinClub { club_id } => self.join_club(club_id).await,

            Action::ToggleRsvp { event_id } => self.toggle_rsvp(event_id).await,
            Action::MarkAttendance { event_id } => {
                let notice = self
                    .view
                    .write()
                    .mark_attendance(event_id, Local::now().naive_local());
                self.notify(notice);
            }

            Action::OpenAddTeam => self.update_view(|view| view.open_add_team()),
            Action::CreateTeam { draft } => self.create_team(&draft),
            Action::AddTeamMember { team_id, member } => self.add_team_member(team_id, &member),
            Action::OpenChat { team_id } => {
                let result = self.view.write().open_chat(team_id, Instant::now());
                match result {
                    Ok(()) => self.publish(),
                    Err(e) => self.fail(e),
                }
            }
            Action::SendChat { text } => {
                let sent = self.view.write().send_chat(&text, Instant::now());
                if sent {
                    self.publish();
                }
            }

            Action::CloseModal => self.update_view(|view| {
                view.close_modal();
            }),
            Action::Escape => {
                self.update_view(|view| {
                    view.close_modal();
                });
                self.navigate("").await;
            }
            Action::DismissToast { id } => {
                self.notifications.dismiss(id);
            }
        }
    }

    // ----- Navigation -----

    async fn navigate(&self, fragment: &str) {
        match Route::from_fragment(fragment) {
            Route::Section(section) => self.navigate_to(section).await,
            Route::Login => self.update_view(|view| view.open_login()),
            Route::Unknown(name) => {
                tracing::debug!(section = %name, "Unknown section, staying put");
            }
        }
    }

    /// Run a full section transition, load hook included
    pub async fn navigate_to(&self, section: Section) {
        let ui = &self.config.ui;

        self.view.write().close_dropdown();
        let transition = self.router.write().begin_section(section);
        self.publish();

        tokio::time::sleep(Duration::from_millis(ui.transition_ms)).await;
        let activated = self.router.write().activate(&transition);
        if !activated {
            return;
        }
        let activated_at = Instant::now();
        tracing::info!(section = %section, "Section shown");
        self.publish();

        tokio::time::sleep(Duration::from_millis(ui.settle_ms)).await;
        self.run_hook(transition.hook()).await;

        tokio::time::sleep_until(activated_at + Duration::from_millis(ui.loader_ms)).await;
        self.router.write().finish_loading(&transition);
        self.publish();
    }

    async fn run_hook(&self, hook: LoadHook) {
        tracing::debug!(hook = ?hook, "Running load hook");

        match hook {
            LoadHook::RefreshStats => self.init().await,
            LoadHook::LoadClubs => {
                let clubs = self.api.list_clubs().await;
                self.snapshot.write().clubs = clubs;
            }
            LoadHook::LoadEvents => {
                let events = self.api.list_events().await;
                self.snapshot.write().events = events;
            }
            LoadHook::LoadTeams => {
                let teams = self.api.list_teams().await;
                self.snapshot.write().teams = teams;
            }
            LoadHook::LoadProfile | LoadHook::LoadAttendance => {}
        }
    }

    // ----- Account -----

    async fn login(&self, email: &str, password: &str) {
        {
            let mut view = self.view.write();
            if !view.begin_login() {
                view.open_login();
                view.begin_login();
            }
        }
        self.publish();

        let user = self.api.login(email, password).await;
        self.view.write().finish_login();
        tracing::info!(user = %user.name, "Login completed");
        self.notify(Notice::success("Login successful! Welcome back."));
    }

    async fn logout(&self) {
        self.view.write().close_dropdown();
        self.api.logout().await;
        self.notify(Notice::success("Logged out successfully!"));
    }

    // ----- Clubs -----

    fn toggle_club(&self, club_id: u32) {
        let result = self.view.write().toggle_club_membership(club_id);
        match result {
            Ok(notice) => {
                let joined = self.view.read().is_new_club(club_id);
                if joined {
                    self.highlight_club(club_id);
                }
                self.notify(notice);
            }
            Err(e) => self.fail(e),
        }
    }

    async fn join_club(&self, club_id: u32) {
        match self.api.join_club(club_id).await {
            Ok(outcome) => {
                let clubs = self.api.list_clubs().await;
                self.snapshot.write().clubs = clubs;

                let added = self.view.write().mark_club_joined(club_id);
                match added {
                    Ok(true) => self.highlight_club(club_id),
                    Ok(false) => {}
                    Err(e) => tracing::warn!(club_id, error = %e, "Joined club missing from catalog"),
                }
                self.notify(Notice::success(outcome.message));
            }
            Err(e) => self.fail(e),
        }
    }

    fn highlight_club(&self, club_id: u32) {
        let window = Duration::from_millis(self.config.ui.club_highlight_ms);
        self.after(window, move |view| view.clear_new_club(club_id));
    }

    // ----- Events -----

    async fn toggle_rsvp(&self, event_id: u32) {
        match self.api.toggle_rsvp(event_id).await {
            Ok(outcome) => {
                {
                    let mut snapshot = self.snapshot.write();
                    if let Some(event) = snapshot.events.iter_mut().find(|e| e.id == event_id) {
                        event.rsvpd = outcome.rsvpd;
                    }
                }
                let notice = self.view.write().set_rsvp(event_id, outcome.rsvpd);
                self.notify(notice);
            }
            Err(e) => self.fail(e),
        }
    }

    // ----- Teams -----

    fn create_team(&self, draft: &TeamDraft) {
        let (team, notice) = self.view.write().create_team(draft, &mut rand::thread_rng());

        let team_id = team.id;
        let window = Duration::from_millis(self.config.ui.team_highlight_ms);
        self.after(window, move |view| view.clear_new_team(team_id));
        self.notify(notice);
    }

    fn add_team_member(&self, team_id: u32, member: &MemberDraft) {
        let result = self.view.write().add_team_member(team_id, member);
        match result {
            Ok(notice) => self.notify(notice),
            Err(e) => self.fail(e),
        }
    }

    // ----- Helpers -----

    fn update_view(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.view.write());
        self.publish();
    }

    /// Apply `f` to the view once `delay` has passed
    fn after(&self, delay: Duration, f: impl FnOnce(&mut ViewState) + Send + 'static) {
        let portal = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            portal.update_view(f);
        });
    }

    fn notify(&self, notice: Notice) {
        self.notifications.notify(notice);
        self.publish();
    }

    fn fail(&self, error: StoreError) {
        tracing::warn!(error = %error, "Action failed");
        self.notifications.error(error.to_string());
        self.publish();
    }

    /// Render every mounted fragment
    pub fn render(&self) -> Vec<Fragment> {
        let user = self.api.current_user();
        let view = self.view.read();
        let snapshot = self.snapshot.read();

        let ctx = RenderContext {
            state: &view,
            events: &snapshot.events,
            user: user.as_ref(),
            now: Instant::now(),
        };
        self.renderer.render_all(&ctx)
    }

    fn publish(&self) {
        if self.fragments_tx.receiver_count() == 0 {
            return;
        }
        for fragment in self.render() {
            let _ = self.fragments_tx.send(fragment);
        }
    }

    // ----- Accessors -----

    pub fn current_user(&self) -> Option<User> {
        self.api.current_user()
    }

    pub fn router(&self) -> RouterView {
        self.router.read().view()
    }

    pub fn current_section(&self) -> Section {
        self.router.read().current()
    }

    /// Read the view state
    pub fn view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.view.read())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.read().clone()
    }

    pub fn stats(&self) -> PortalStats {
        let snapshot = self.snapshot.read();
        PortalStats {
            clubs: snapshot.clubs.len(),
            events: snapshot.events.len(),
            teams: snapshot.teams.len(),
            joined_clubs: self.view.read().joined_clubs().len(),
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn subscribe_fragments(&self) -> broadcast::Receiver<Fragment> {
        self.fragments_tx.subscribe()
    }

    pub fn subscribe_toasts(&self) -> broadcast::Receiver<ToastEvent> {
        self.notifications.subscribe()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
