//! Application context: one of each store, built once at start-up and passed
//! to whatever needs them.
//!
//! The stores don't know about each other. Operations that need more than one
//! of them (attributing a new experience to the signed-in host, checking
//! ownership before an edit) live here.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::{self, Settings, StorageConfig};
use crate::error::ContextError;
use crate::experiences::ExperienceStore;
use crate::ids;
use crate::model::{CompanionView, Experience, ExperienceDraft, ExperienceUpdate, Identity};
use crate::seed;
use crate::session::SessionStore;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::toast::ToastQueue;

pub struct AppContext {
    session: SessionStore,
    experiences: ExperienceStore,
    toasts: ToastQueue,
}

impl AppContext {
    /// Loads both persisted stores from `storage` before returning.
    pub fn new(storage: Arc<dyn Storage>, settings: &Settings) -> Self {
        AppContext {
            session: SessionStore::load(storage.clone()),
            experiences: ExperienceStore::load_with(storage, settings.seed_on_empty),
            toasts: ToastQueue::with_default_duration(settings.default_toast_ms),
        }
    }

    /// File-backed context rooted at `config`, using its settings file.
    pub fn open(config: &StorageConfig) -> Self {
        let settings = config::load_settings(config);
        tracing::debug!(root = %config.root().display(), ?settings, "Opening app context");
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(config.root()));
        Self::new(storage, &settings)
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), &Settings::default())
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    pub fn experiences(&self) -> &ExperienceStore {
        &self.experiences
    }

    pub fn experiences_mut(&mut self) -> &mut ExperienceStore {
        &mut self.experiences
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    fn current_user(&self) -> Result<&Identity, ContextError> {
        self.session.user().ok_or(ContextError::NotAuthenticated)
    }

    fn owned_experience(&self, id: &str) -> Result<&Experience, ContextError> {
        let user = self.current_user()?;
        let experience = self
            .experiences
            .get(id)
            .ok_or_else(|| ContextError::NotFound(id.to_string()))?;
        if !experience.is_hosted_by(&user.id) {
            return Err(ContextError::NotHost {
                experience_id: id.to_string(),
                host_id: experience.host_id.clone(),
                user_id: user.id.clone(),
            });
        }
        Ok(experience)
    }

    /// Creates an experience hosted by the signed-in identity.
    ///
    /// The host takes the first spot, so `draft.capacity` must be at least 1.
    pub fn host_experience(&mut self, draft: ExperienceDraft) -> Result<&Experience, ContextError> {
        let host_id = self.current_user()?.id.clone();
        if draft.capacity == 0 {
            return Err(ContextError::NoRoomForHost);
        }
        let experience = draft.into_experience(ids::new_experience_id(), &host_id);
        let id = experience.id.clone();
        tracing::info!(id = %id, host = %host_id, "Hosting experience");

        self.experiences.add(experience);
        self.toasts.success(
            "Experience created!",
            Some("Your experience is now live and visible to other travellers."),
        );
        self.experiences
            .get(&id)
            .ok_or(ContextError::NotFound(id))
    }

    /// Applies `update` to an experience the signed-in identity hosts.
    pub fn edit_experience(
        &mut self,
        id: &str,
        update: ExperienceUpdate,
    ) -> Result<&Experience, ContextError> {
        self.owned_experience(id)?;
        let updated = self
            .experiences
            .update(id, update)
            .ok_or_else(|| ContextError::NotFound(id.to_string()))?;
        self.toasts.success("Experience updated", None);
        Ok(updated)
    }

    pub fn delete_experience(&mut self, id: &str) -> Result<Experience, ContextError> {
        self.owned_experience(id)?;
        let removed = self
            .experiences
            .remove(id)
            .ok_or_else(|| ContextError::NotFound(id.to_string()))?;
        self.toasts.info("Experience deleted", Some(&removed.title));
        Ok(removed)
    }

    /// Records a join request for an existing experience.
    ///
    /// Returns `Ok(false)` when the experience is fully booked, or when the
    /// signed-in identity hosts it, is already on the roster or has already
    /// asked.
    pub fn request_to_join(&mut self, id: &str, today: NaiveDate) -> Result<bool, ContextError> {
        let user_id = self.current_user()?.id.clone();
        let experience = self
            .experiences
            .get(id)
            .ok_or_else(|| ContextError::NotFound(id.to_string()))?;
        if experience.spots_left() == 0
            || experience.is_hosted_by(&user_id)
            || experience.participant_ids.contains(&user_id)
        {
            return Ok(false);
        }
        let title = experience.title.clone();

        let requested = self.session.request_to_join(id, today);
        if requested {
            self.toasts.success("Request sent", Some(&title));
        }
        Ok(requested)
    }

    /// Reference companions joined with the session's waved flags.
    pub fn companions(&self) -> Vec<CompanionView<'static>> {
        seed::companions()
            .iter()
            .map(|companion| CompanionView {
                companion,
                has_waved: self.session.has_waved(&companion.profile.id),
            })
            .collect()
    }
}
