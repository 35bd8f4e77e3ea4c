//! Per-visitor state.
//!
//! The session cookie only carries the visitor id. Widget state lives in
//! [`VisitorStates`], keyed by that id, and every change is applied in place
//! under its lock. Two requests of one visitor that overlap therefore both
//! keep their changes, whatever order they finish in.

pub mod cache;
pub mod store;

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use khouse_content::LanguageCode;
use tower_sessions::Session;
use uuid::Uuid;

use crate::assistant::{ChatState, MatcherState};
use crate::gallery::GalleryState;
use crate::reservation::ReservationForm;
use crate::types::{AppError, Result};
use crate::AppState;

pub use cache::IdleMap;
pub use store::VisitorSessionStore;

const VISITOR_ID: &str = "visitor_id";

/// Everything the page remembers about one visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitorState {
    pub language: Option<LanguageCode>,
    pub promo_dismissed: bool,
    pub gallery: GalleryState,
    pub matcher: MatcherState,
    pub chat: ChatState,
    pub reservation: ReservationForm,
}

/// Visitor state by visitor id, bounded and expiring like the sessions.
pub type VisitorStates = IdleMap<Uuid, VisitorState>;

/// Extractor giving access to the visitor's state.
pub struct Visitor {
    session: Session,
    states: Arc<VisitorStates>,
}

impl FromRequestParts<AppState> for Visitor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Session(msg.to_string()))?;
        Ok(Self::new(session, Arc::clone(&state.visitors)))
    }
}

impl Visitor {
    pub fn new(session: Session, states: Arc<VisitorStates>) -> Self {
        Self { session, states }
    }

    /// Id stored in the session, if this visitor has one yet.
    async fn known_id(&self) -> Result<Option<Uuid>> {
        Ok(self.session.get::<Uuid>(VISITOR_ID).await?)
    }

    /// Stable id of the visitor, created on first use.
    pub async fn id(&self) -> Result<Uuid> {
        if let Some(id) = self.known_id().await? {
            return Ok(id);
        }
        let id = Uuid::new_v4();
        self.session.insert(VISITOR_ID, id).await?;
        Ok(id)
    }

    /// Snapshot of the visitor's state. A visitor without an id gets the
    /// defaults and no id is created.
    pub async fn state(&self) -> Result<VisitorState> {
        Ok(match self.known_id().await? {
            Some(id) => self.states.get(&id).unwrap_or_default(),
            None => VisitorState::default(),
        })
    }

    /// Apply `f` to the latest state of this visitor.
    ///
    /// Handlers that wait on the AI backend or on a delay call this after
    /// the wait, so changes made by other requests meanwhile are kept.
    pub async fn update<R>(&self, f: impl FnOnce(&mut VisitorState) -> R) -> Result<R> {
        let id = self.id().await?;
        Ok(self.states.update(id, f))
    }

    pub async fn set_language(&self, lang: LanguageCode) -> Result<()> {
        self.update(|s| s.language = Some(lang)).await
    }

    /// Active language: an explicit code (stored for later requests), then
    /// the stored choice, then the site default. Unknown codes select the
    /// fallback language.
    pub async fn resolve_language(
        &self,
        requested: Option<&str>,
        default: LanguageCode,
    ) -> Result<LanguageCode> {
        if let Some(code) = requested {
            let lang = LanguageCode::parse_or_fallback(code);
            self.set_language(lang).await?;
            return Ok(lang);
        }
        Ok(self.state().await?.language.unwrap_or(default))
    }
}
