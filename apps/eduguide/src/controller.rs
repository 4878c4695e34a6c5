#![allow(dead_code)]

//! Application state controller. Owns session and persisted state and the
//! transition rules between them.
//!
//! Persisted slices (identity, saved colleges, theme) are loaded once in
//! `AppController::load` and written in full on every change, before the
//! in-memory state is updated. Everything else lives only as long as the
//! controller.
//!
//! The controller is a cheap `Clone` handle. The session mutex is never held
//! across an `.await`; the engine call is the only suspension point.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::guidance::{College, GuidanceData};
use crate::models::profile::StudentProfile;
use crate::models::user::{Identity, Theme};
use crate::recommendation::RecommendationClient;
use crate::store::{
    clear_record, load_record, save_record, KeyValueStore, SAVED_COLLEGES_KEY, THEME_KEY,
    USER_KEY,
};

/// Hard upper bound on the side-by-side comparison set.
pub const MAX_COMPARISON: usize = 3;

/// Where a submission cycle currently stands. `Succeeded` and `Failed` are
/// ready states: the next submission re-enters `Loading` from either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Recommendations,
    Dashboard,
    StudyMaterial,
    BookCounsellor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedToggle {
    Saved,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonToggle {
    Added,
    Removed,
}

#[derive(Debug, Default)]
struct Session {
    identity: Option<Identity>,
    profile_draft: StudentProfile,
    guidance: Option<GuidanceData>,
    saved_colleges: Vec<College>,
    comparison_set: Vec<College>,
    phase: SubmissionPhase,
    last_error: Option<String>,
    theme: Theme,
    view: View,
    /// Bumped on logout so in-flight submissions can tell their session ended.
    generation: u64,
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears `Loading` if a submission ends without recording an outcome
/// (dropped future, panic inside the engine).
struct LoadingGuard<'a> {
    session: &'a Mutex<Session>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut session = lock(self.session);
        if session.phase == SubmissionPhase::Loading {
            warn!("Submission ended without a result; returning to idle");
            session.phase = SubmissionPhase::Idle;
        }
    }
}

#[derive(Clone)]
pub struct AppController {
    session: Arc<Mutex<Session>>,
    store: Arc<dyn KeyValueStore>,
    client: RecommendationClient,
}

impl AppController {
    /// Builds a controller, reading the three persisted records once.
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        client: RecommendationClient,
    ) -> Result<Self, AppError> {
        let identity: Option<Identity> = load_record(store.as_ref(), USER_KEY)?;
        let saved_colleges: Vec<College> =
            load_record(store.as_ref(), SAVED_COLLEGES_KEY)?.unwrap_or_default();
        let theme: Theme = load_record(store.as_ref(), THEME_KEY)?.unwrap_or_default();

        info!(
            "Loaded state: logged_in={}, saved_colleges={}, theme={}",
            identity.is_some(),
            saved_colleges.len(),
            theme
        );

        let session = Session {
            identity,
            saved_colleges,
            theme,
            ..Session::default()
        };

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            store,
            client,
        })
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    // ── identity ────────────────────────────────────────────────────────────

    pub fn login(&self, name: &str, email: &str) -> Result<(), AppError> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() {
            return Err(AppError::Validation(
                "Name and email are both required".to_string(),
            ));
        }

        let identity = Identity {
            name: name.to_string(),
            email: email.to_string(),
        };
        save_record(self.store.as_ref(), USER_KEY, &identity)?;
        self.session().identity = Some(identity);

        info!("Logged in as {name}");
        Ok(())
    }

    /// Ends the session. The saved shortlist is discarded; the theme is kept.
    ///
    /// The in-memory session is always reset. On disk the shortlist is
    /// cleared before the identity, and the identity is left in place if the
    /// shortlist cannot be cleared.
    pub fn logout(&self) -> Result<(), AppError> {
        let cleared = clear_record(self.store.as_ref(), SAVED_COLLEGES_KEY)
            .and_then(|()| clear_record(self.store.as_ref(), USER_KEY));

        let mut session = self.session();
        session.identity = None;
        session.guidance = None;
        session.saved_colleges.clear();
        session.comparison_set.clear();
        session.last_error = None;
        session.view = View::default();
        session.generation += 1;

        info!("Logged out; theme {} kept", session.theme);
        drop(session);

        cleared.map_err(|e| {
            warn!("Logout could not clear persisted state: {e:#}");
            AppError::Storage(e)
        })
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session().identity.clone()
    }

    // ── recommendations ─────────────────────────────────────────────────────

    pub fn update_draft(&self, profile: StudentProfile) {
        self.session().profile_draft = profile;
    }

    pub fn profile_draft(&self) -> StudentProfile {
        self.session().profile_draft.clone()
    }

    /// Runs one submission cycle.
    ///
    /// An incomplete profile is rejected before the engine is contacted, and
    /// a submission while another is in flight is rejected with `Busy`. On
    /// success the guidance is replaced wholesale; on failure the previous
    /// guidance is kept and the message is stored in `last_error`. Either
    /// way `Loading` is left on every exit path. A result that arrives after
    /// a logout is discarded and reported as `SessionEnded`.
    pub async fn submit_profile(&self, profile: StudentProfile) -> Result<(), AppError> {
        let missing = profile.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let (_loading, generation) = {
            let mut session = self.session();
            if session.phase == SubmissionPhase::Loading {
                warn!("Rejected submission: a request is already in flight");
                return Err(AppError::Busy);
            }
            session.phase = SubmissionPhase::Loading;
            session.last_error = None;
            session.profile_draft = profile.clone();
            let guard = LoadingGuard {
                session: &self.session,
            };
            (guard, session.generation)
        };

        let result = self.client.fetch_recommendations(&profile).await;

        let mut session = self.session();
        if session.generation != generation {
            warn!("Discarding submission result: the session ended while it was in flight");
            session.phase = SubmissionPhase::Idle;
            return Err(AppError::SessionEnded);
        }
        match result {
            Ok(guidance) => {
                info!(
                    "Submission succeeded with {} recommendations",
                    guidance.recommendations.len()
                );
                session.guidance = Some(guidance);
                session.last_error = None;
                session.view = View::Recommendations;
                session.phase = SubmissionPhase::Succeeded;
                Ok(())
            }
            Err(e) => {
                warn!("Submission failed: {e}");
                session.last_error = Some(e.to_string());
                session.phase = SubmissionPhase::Failed;
                Err(e)
            }
        }
    }

    pub fn guidance(&self) -> Option<GuidanceData> {
        self.session().guidance.clone()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.session().phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == SubmissionPhase::Loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.session().last_error.clone()
    }

    // ── saved shortlist ─────────────────────────────────────────────────────

    /// Adds the college to the saved set, or removes it if its id is already
    /// there. Unbounded.
    pub fn toggle_saved(&self, college: &College) -> Result<SavedToggle, AppError> {
        let mut session = self.session();

        let mut saved = session.saved_colleges.clone();
        let outcome = if let Some(pos) = saved.iter().position(|c| c.id == college.id) {
            saved.remove(pos);
            SavedToggle::Removed
        } else {
            saved.push(college.clone());
            SavedToggle::Saved
        };

        save_record(self.store.as_ref(), SAVED_COLLEGES_KEY, &saved)?;
        session.saved_colleges = saved;
        Ok(outcome)
    }

    pub fn saved_colleges(&self) -> Vec<College> {
        self.session().saved_colleges.clone()
    }

    pub fn is_saved(&self, college_id: &str) -> bool {
        self.session()
            .saved_colleges
            .iter()
            .any(|c| c.id == college_id)
    }

    // ── comparison ──────────────────────────────────────────────────────────

    /// Adds or removes a college from the comparison set. Removal always
    /// succeeds; adding is refused once `MAX_COMPARISON` colleges are in.
    pub fn toggle_comparison(&self, college: &College) -> Result<ComparisonToggle, AppError> {
        let mut session = self.session();
        let set = &mut session.comparison_set;

        if let Some(pos) = set.iter().position(|c| c.id == college.id) {
            set.remove(pos);
            return Ok(ComparisonToggle::Removed);
        }

        if set.len() >= MAX_COMPARISON {
            return Err(AppError::ComparisonFull {
                limit: MAX_COMPARISON,
            });
        }

        set.push(college.clone());
        Ok(ComparisonToggle::Added)
    }

    pub fn comparison_set(&self) -> Vec<College> {
        self.session().comparison_set.clone()
    }

    pub fn is_comparing(&self, college_id: &str) -> bool {
        self.session()
            .comparison_set
            .iter()
            .any(|c| c.id == college_id)
    }

    pub fn clear_comparison(&self) {
        self.session().comparison_set.clear();
    }

    // ── display preferences ─────────────────────────────────────────────────

    pub fn theme(&self) -> Theme {
        self.session().theme
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), AppError> {
        save_record(self.store.as_ref(), THEME_KEY, &theme)?;
        self.session().theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&self) -> Result<Theme, AppError> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn view(&self) -> View {
        self.session().view
    }

    pub fn set_view(&self, view: View) {
        self.session().view = view;
    }
}
