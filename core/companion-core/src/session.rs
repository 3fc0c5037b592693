//! Session store: at most one signed-in identity, persisted under
//! [`SESSION_KEY`].
//!
//! # File Format
//!
//! ```json
//! { "isAuthenticated": true, "user": { ... Identity fields ... } }
//! ```
//!
//! State is loaded in [`SessionStore::load`], before the store is handed to any
//! consumer, so a returning user is never observed as signed out. Every
//! mutation re-persists the whole record; write failures are logged only.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids;
use crate::model::{Identity, JoinRequest, JoinStatus, ProfileUpdate, VerificationStatus};
use crate::seed;
use crate::storage::{self, Storage, SESSION_KEY};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<Identity>,
}

impl AuthState {
    fn signed_in(user: Identity) -> Self {
        AuthState {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// A flag without a user (or the reverse) can't be acted on.
    fn is_consistent(&self) -> bool {
        self.is_authenticated == self.user.is_some()
    }
}

pub struct SessionStore {
    state: AuthState,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Restores the previous session, or starts signed out when storage is
    /// empty, unreadable or inconsistent.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let mut state = storage::load_or(storage.as_ref(), SESSION_KEY, AuthState::default)
            .into_inner();
        if !state.is_consistent() {
            tracing::warn!(
                is_authenticated = state.is_authenticated,
                has_user = state.user.is_some(),
                "Inconsistent session record, starting signed out"
            );
            state = AuthState::default();
        }
        tracing::debug!(authenticated = state.is_authenticated, "Session loaded");
        SessionStore { state, storage }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn user(&self) -> Option<&Identity> {
        self.state.user.as_ref()
    }

    /// Signs in as the seed identity with `email` substituted. The email is
    /// not validated.
    pub fn sign_in(&mut self, email: &str) {
        let mut user = seed::default_identity();
        user.email = email.to_string();
        self.state = AuthState::signed_in(user);
        tracing::info!("Signed in");
        self.persist();
    }

    /// Signs up a new identity built from the seed template: fresh id, given
    /// name, `basic` verification and only the starter badge.
    pub fn sign_up(&mut self, email: &str, name: &str) {
        let mut user = seed::default_identity();
        user.id = ids::new_user_id();
        user.email = email.to_string();
        user.name = name.to_string();
        user.verification_status = VerificationStatus::Basic;
        user.badges = vec![seed::STARTER_BADGE.to_string()];
        tracing::info!(user_id = %user.id, "Signed up");
        self.state = AuthState::signed_in(user);
        self.persist();
    }

    /// Idempotent.
    pub fn sign_out(&mut self) {
        self.state = AuthState::default();
        tracing::info!("Signed out");
        self.persist();
    }

    /// Merges `update` into the current identity.
    ///
    /// Returns `false` without touching anything when signed out.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        let Some(user) = self.state.user.as_mut() else {
            tracing::debug!("Profile update ignored (signed out)");
            return false;
        };
        update.apply_to(user);
        self.persist();
        true
    }

    pub fn has_waved(&self, companion_id: &str) -> bool {
        self.user().is_some_and(|u| u.has_waved(companion_id))
    }

    /// Waves at `companion_id`, or takes the wave back if already waved.
    ///
    /// Returns the new waved state, or `None` when signed out.
    pub fn toggle_wave(&mut self, companion_id: &str) -> Option<bool> {
        let user = self.state.user.as_mut()?;
        let waved = match user.waved_companions.iter().position(|id| id == companion_id) {
            Some(index) => {
                user.waved_companions.remove(index);
                false
            }
            None => {
                user.waved_companions.push(companion_id.to_string());
                true
            }
        };
        self.persist();
        Some(waved)
    }

    /// Records a pending request to join `experience_id`.
    ///
    /// Returns `false` when signed out or when a request already exists.
    pub fn request_to_join(&mut self, experience_id: &str, date: NaiveDate) -> bool {
        let Some(user) = self.state.user.as_mut() else {
            return false;
        };
        if user.join_request_for(experience_id).is_some() {
            return false;
        }
        user.join_requests.push(JoinRequest {
            experience_id: experience_id.to_string(),
            status: JoinStatus::Pending,
            date,
        });
        self.persist();
        true
    }

    fn persist(&self) {
        storage::save_logged(self.storage.as_ref(), SESSION_KEY, &self.state);
    }

    /// Test helper: Sign in as an arbitrary identity without persisting.
    /// Only available with the `test-helpers` feature or in tests.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn set_user_for_test(&mut self, user: Identity) {
        self.state = AuthState::signed_in(user);
    }
}
