//! Session orchestration: the state machine sequencing identity
//! resolution, league enumeration and league-detail loading.
//!
//! The orchestrator is the sole owner and sole writer of all mutable
//! session state. Requests for a stage are never canceled; instead each
//! stage carries a monotonically increasing ticket, and a completing
//! request's result is applied only when its ticket is still the latest
//! issued for that stage. A slower superseded request therefore finishes
//! quietly without clobbering fresher state.

use tracing::{debug, info, instrument};

use crate::api::{BasicLeague, LeagueDetail, ResolvedUser, ScoutClient};
use crate::error::AppError;
use crate::scoring::{DisplayableSetting, normalize_scoring_settings};

/// The three network-backed stages of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Identity,
    Leagues,
    Detail,
}

/// Observable phase of the session, derived from state contents.
/// There is no terminal phase; every phase accepts new triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    ResolvingIdentity,
    IdentityError,
    IdentityResolved,
    LoadingLeagues,
    LeaguesError,
    LeaguesLoaded,
    LoadingDetail,
    DetailError,
    DetailLoaded,
}

#[derive(Debug, Default)]
struct StageTickets {
    identity: u64,
    leagues: u64,
    detail: u64,
}

impl StageTickets {
    fn issue(&mut self, stage: Stage) -> u64 {
        let slot = match stage {
            Stage::Identity => &mut self.identity,
            Stage::Leagues => &mut self.leagues,
            Stage::Detail => &mut self.detail,
        };
        *slot += 1;
        *slot
    }

    fn is_current(&self, stage: Stage, ticket: u64) -> bool {
        ticket
            == match stage {
                Stage::Identity => self.identity,
                Stage::Leagues => self.leagues,
                Stage::Detail => self.detail,
            }
    }
}

/// Drives the resolve → enumerate → detail pipeline and owns its state.
#[derive(Debug)]
pub struct Session {
    client: ScoutClient,
    season: i32,

    identity: Option<ResolvedUser>,
    identity_error: Option<AppError>,
    resolving: bool,

    leagues: Vec<BasicLeague>,
    leagues_loaded: bool,
    leagues_error: Option<AppError>,
    loading_leagues: bool,

    selected_league_id: Option<String>,
    detail: Option<LeagueDetail>,
    detail_error: Option<AppError>,
    loading_detail: bool,

    tickets: StageTickets,
}

impl Session {
    pub fn new(client: ScoutClient, season: i32) -> Self {
        Self {
            client,
            season,
            identity: None,
            identity_error: None,
            resolving: false,
            leagues: Vec::new(),
            leagues_loaded: false,
            leagues_error: None,
            loading_leagues: false,
            selected_league_id: None,
            detail: None,
            detail_error: None,
            loading_detail: false,
            tickets: StageTickets::default(),
        }
    }

    // --- Triggers ---------------------------------------------------------

    /// Submits a free-text identifier. Clears the previous identity and all
    /// downstream state, resolves, and on success enumerates leagues for
    /// the currently selected season.
    #[instrument(skip(self))]
    pub async fn submit_identifier(&mut self, input: &str) {
        self.clear_identity_state();
        self.clear_leagues_state();
        self.clear_detail_state();
        self.selected_league_id = None;

        let ticket = self.begin_stage(Stage::Identity);
        let result = self.client.resolve_user(input).await;
        self.apply_identity_result(ticket, result);

        if self.identity.is_some() {
            self.reload_leagues().await;
        }
    }

    /// Changes the selected season. The resolved identity is kept; league
    /// selection and detail are invalidated, and enumeration re-runs when
    /// an identity is present.
    #[instrument(skip(self))]
    pub async fn change_season(&mut self, season: i32) {
        self.season = season;
        self.selected_league_id = None;
        self.clear_detail_state();

        if self.identity.is_some() {
            self.reload_leagues().await;
        }
    }

    /// Selects a league (or clears the selection with `None`). Selection
    /// clears only detail state; leagues and identity are untouched.
    #[instrument(skip(self))]
    pub async fn select_league(&mut self, league_id: Option<&str>) {
        self.clear_detail_state();

        match league_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => {
                self.selected_league_id = Some(id.to_string());
                let ticket = self.begin_stage(Stage::Detail);
                let result = self.client.fetch_league_details(id).await;
                self.apply_detail_result(ticket, result);
            }
            None => {
                self.selected_league_id = None;
            }
        }
    }

    /// Explicit input reset: returns the session to `Idle`.
    pub fn reset(&mut self) {
        self.clear_identity_state();
        self.clear_leagues_state();
        self.clear_detail_state();
        self.selected_league_id = None;
    }

    async fn reload_leagues(&mut self) {
        let Some(user_id) = self.identity.as_ref().map(|u| u.user_id.clone()) else {
            return;
        };
        self.clear_leagues_state();
        let ticket = self.begin_stage(Stage::Leagues);
        let result = self.client.fetch_leagues(&user_id, self.season).await;
        self.apply_leagues_result(ticket, result);
    }

    // --- Ticketed request lifecycle --------------------------------------
    //
    // Public so an embedding UI can issue concurrent requests itself and
    // still get the superseding semantics; the async triggers above use
    // the same path.

    /// Issues a new ticket for a stage and marks it loading. Any result
    /// carrying an older ticket for the stage will be discarded.
    pub fn begin_stage(&mut self, stage: Stage) -> u64 {
        match stage {
            Stage::Identity => self.resolving = true,
            Stage::Leagues => self.loading_leagues = true,
            Stage::Detail => self.loading_detail = true,
        }
        self.tickets.issue(stage)
    }

    /// Applies an identity result if its ticket is still current.
    pub fn apply_identity_result(&mut self, ticket: u64, result: Result<ResolvedUser, AppError>) {
        if !self.tickets.is_current(Stage::Identity, ticket) {
            debug!("Discarding stale identity result (ticket {ticket})");
            return;
        }
        self.resolving = false;
        match result {
            Ok(user) => {
                info!("Session identity set to {}", user.user_id);
                self.identity = Some(user);
                self.identity_error = None;
            }
            Err(e) => {
                self.identity = None;
                self.identity_error = Some(e);
            }
        }
    }

    /// Applies a leagues result if its ticket is still current. A failure
    /// degrades to an empty league set with a stage-scoped error so the
    /// resolved identity survives a bad season query.
    pub fn apply_leagues_result(
        &mut self,
        ticket: u64,
        result: Result<Vec<BasicLeague>, AppError>,
    ) {
        if !self.tickets.is_current(Stage::Leagues, ticket) {
            debug!("Discarding stale leagues result (ticket {ticket})");
            return;
        }
        self.loading_leagues = false;
        self.leagues_loaded = true;
        match result {
            Ok(leagues) => {
                self.leagues = leagues;
                self.leagues_error = None;
            }
            Err(e) => {
                self.leagues = Vec::new();
                self.leagues_error = Some(e);
            }
        }
    }

    /// Applies a detail result if its ticket is still current. Failures
    /// are detail-scoped and leave identity and league list intact.
    pub fn apply_detail_result(&mut self, ticket: u64, result: Result<LeagueDetail, AppError>) {
        if !self.tickets.is_current(Stage::Detail, ticket) {
            debug!("Discarding stale detail result (ticket {ticket})");
            return;
        }
        self.loading_detail = false;
        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.detail_error = None;
            }
            Err(e) => {
                self.detail = None;
                self.detail_error = Some(e);
            }
        }
    }

    // --- State access -----------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        if self.loading_detail {
            SessionPhase::LoadingDetail
        } else if self.detail_error.is_some() {
            SessionPhase::DetailError
        } else if self.detail.is_some() {
            SessionPhase::DetailLoaded
        } else if self.loading_leagues {
            SessionPhase::LoadingLeagues
        } else if self.leagues_error.is_some() {
            SessionPhase::LeaguesError
        } else if self.leagues_loaded {
            SessionPhase::LeaguesLoaded
        } else if self.resolving {
            SessionPhase::ResolvingIdentity
        } else if self.identity_error.is_some() {
            SessionPhase::IdentityError
        } else if self.identity.is_some() {
            SessionPhase::IdentityResolved
        } else {
            SessionPhase::Idle
        }
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    pub fn identity(&self) -> Option<&ResolvedUser> {
        self.identity.as_ref()
    }

    pub fn identity_error(&self) -> Option<&AppError> {
        self.identity_error.as_ref()
    }

    pub fn leagues(&self) -> &[BasicLeague] {
        &self.leagues
    }

    pub fn leagues_error(&self) -> Option<&AppError> {
        self.leagues_error.as_ref()
    }

    /// True when enumeration succeeded and found nothing: the "none found"
    /// state, rendered distinctly from an error.
    pub fn has_no_leagues(&self) -> bool {
        self.leagues_loaded && self.leagues.is_empty() && self.leagues_error.is_none()
    }

    pub fn selected_league_id(&self) -> Option<&str> {
        self.selected_league_id.as_deref()
    }

    pub fn detail(&self) -> Option<&LeagueDetail> {
        self.detail.as_ref()
    }

    pub fn detail_error(&self) -> Option<&AppError> {
        self.detail_error.as_ref()
    }

    /// Curated scoring settings of the loaded detail, derived fresh on
    /// every call.
    pub fn scoring_summary(&self) -> Vec<DisplayableSetting> {
        normalize_scoring_settings(
            self.detail
                .as_ref()
                .and_then(|d| d.scoring_settings.as_ref()),
        )
    }

    // --- Invalidation -----------------------------------------------------

    fn clear_identity_state(&mut self) {
        self.identity = None;
        self.identity_error = None;
        self.resolving = false;
    }

    fn clear_leagues_state(&mut self) {
        self.leagues = Vec::new();
        self.leagues_loaded = false;
        self.leagues_error = None;
        self.loading_leagues = false;
    }

    fn clear_detail_state(&mut self) {
        self.detail = None;
        self.detail_error = None;
        self.loading_detail = false;
    }
}
