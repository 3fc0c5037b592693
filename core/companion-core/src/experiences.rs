//! Experience collection, persisted as one JSON list under
//! [`EXPERIENCES_KEY`].
//!
//! # Ordering
//!
//! Newest first: [`ExperienceStore::add`] prepends.
//!
//! # Unknown ids
//!
//! `update` and `remove` on an id that isn't present leave the collection
//! untouched and return `None`. They never error.
//!
//! # Persistence
//!
//! Every mutation rewrites the whole list. Fine for tens of records.

use std::sync::Arc;

use crate::model::{Experience, ExperienceUpdate};
use crate::seed;
use crate::storage::{self, Storage, EXPERIENCES_KEY};

pub struct ExperienceStore {
    experiences: Vec<Experience>,
    storage: Arc<dyn Storage>,
}

impl ExperienceStore {
    /// Loads the stored list, falling back to the bundled seed collection.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self::load_with(storage, true)
    }

    /// Like [`ExperienceStore::load`]; with `seed_on_empty == false` a missing
    /// or malformed list becomes an empty collection instead.
    ///
    /// The fallback is written back so it becomes the persisted state.
    pub fn load_with(storage: Arc<dyn Storage>, seed_on_empty: bool) -> Self {
        let loaded = storage::load_or(storage.as_ref(), EXPERIENCES_KEY, || {
            if seed_on_empty {
                seed::experiences()
            } else {
                Vec::new()
            }
        });
        let fallback = loaded.is_fallback();
        let store = ExperienceStore {
            experiences: loaded.into_inner(),
            storage,
        };
        if fallback {
            tracing::info!(
                count = store.experiences.len(),
                "Initialized experience collection from defaults"
            );
            store.persist();
        }
        store
    }

    pub fn all(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    pub fn for_destination<'a>(
        &'a self,
        destination_id: &'a str,
    ) -> impl Iterator<Item = &'a Experience> + 'a {
        self.experiences
            .iter()
            .filter(move |e| e.destination_id == destination_id)
    }

    pub fn hosted_by<'a>(&'a self, host_id: &'a str) -> impl Iterator<Item = &'a Experience> + 'a {
        self.experiences.iter().filter(move |e| e.is_hosted_by(host_id))
    }

    /// Prepends `experience`. Ids are not checked for uniqueness.
    pub fn add(&mut self, experience: Experience) {
        tracing::debug!(id = %experience.id, "Adding experience");
        self.experiences.insert(0, experience);
        self.persist();
    }

    /// Merges `update` into the record with `id`.
    ///
    /// Returns the updated record, or `None` when no record has that id.
    /// Roster consistency is not checked here; see [`Experience::roster_check`].
    pub fn update(&mut self, id: &str, update: ExperienceUpdate) -> Option<&Experience> {
        let Some(index) = self.experiences.iter().position(|e| e.id == id) else {
            tracing::debug!(id, "Update ignored (unknown experience)");
            return None;
        };
        update.apply_to(&mut self.experiences[index]);
        self.persist();
        self.experiences.get(index)
    }

    /// Removes and returns the record with `id`. Removing a missing id is a
    /// no-op returning `None`.
    pub fn remove(&mut self, id: &str) -> Option<Experience> {
        let Some(index) = self.experiences.iter().position(|e| e.id == id) else {
            tracing::debug!(id, "Remove ignored (unknown experience)");
            return None;
        };
        let removed = self.experiences.remove(index);
        self.persist();
        Some(removed)
    }

    fn persist(&self) {
        storage::save_logged(self.storage.as_ref(), EXPERIENCES_KEY, &self.experiences);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::BrokenStorage;
    use crate::storage::MemoryStorage;

    fn memory() -> Arc<dyn Storage> {
        Arc::new(MemoryStorage::new())
    }

    fn sample(id: &str) -> Experience {
        let mut exp = seed::experiences().remove(0);
        exp.id = id.to_string();
        exp
    }

    #[test]
    fn test_empty_storage_loads_seed_and_persists_it() {
        let storage = memory();
        let store = ExperienceStore::load(storage.clone());
        assert_eq!(store.len(), seed::experiences().len());
        assert!(storage.read(EXPERIENCES_KEY).unwrap().is_some());
    }

    #[test]
    fn test_mutations_survive_failing_backend() {
        let mut store = ExperienceStore::load(Arc::new(BrokenStorage));
        assert_eq!(store.len(), seed::experiences().len());

        store.add(sample("exp-new"));
        assert_eq!(store.all()[0].id, "exp-new");

        let updated = store.update(
            "exp-new",
            ExperienceUpdate {
                capacity: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(updated.map(|e| e.capacity), Some(2));

        assert!(store.remove("exp-new").is_some());
        assert!(store.get("exp-new").is_none());
    }

    #[test]
    fn test_corrupt_storage_loads_seed() {
        let storage = memory();
        storage.write(EXPERIENCES_KEY, "[{\"id\":").unwrap();
        let store = ExperienceStore::load(storage);
        assert_eq!(store.all(), seed::experiences().as_slice());
    }

    #[test]
    fn test_stored_empty_list_is_respected() {
        let storage = memory();
        storage.write(EXPERIENCES_KEY, "[]").unwrap();
        assert!(ExperienceStore::load(storage).is_empty());
    }

    #[test]
    fn test_seed_disabled_falls_back_to_empty() {
        let store = ExperienceStore::load_with(memory(), false);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_prepends() {
        let mut store = ExperienceStore::load(memory());
        let n = store.len();
        store.add(sample("exp-new"));
        assert_eq!(store.len(), n + 1);
        assert_eq!(store.all()[0].id, "exp-new");
    }

    #[test]
    fn test_add_then_get_returns_equal_record() {
        let mut store = ExperienceStore::load(memory());
        let record = sample("exp-new");
        store.add(record.clone());
        assert_eq!(store.get("exp-new"), Some(&record));
    }

    #[test]
    fn test_update_changes_only_capacity() {
        let mut store = ExperienceStore::load(memory());
        let before = store.get("exp-1").unwrap().clone();

        let updated = store
            .update(
                "exp-1",
                ExperienceUpdate {
                    capacity: Some(5),
                    ..Default::default()
                },
            )
            .unwrap()
            .clone();

        let mut expected = before;
        expected.capacity = 5;
        assert_eq!(updated, expected);
        assert_eq!(store.get("exp-1"), Some(&expected));
    }

    #[test]
    fn test_update_unknown_id_leaves_collection_unchanged() {
        let mut store = ExperienceStore::load(memory());
        let before = store.all().to_vec();
        let result = store.update(
            "missing",
            ExperienceUpdate {
                capacity: Some(5),
                ..Default::default()
            },
        );
        assert!(result.is_none());
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_update_does_not_enforce_roster() {
        let mut store = ExperienceStore::load(memory());
        let updated = store
            .update(
                "exp-1",
                ExperienceUpdate {
                    capacity: Some(0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.roster_check().is_err());
    }

    #[test]
    fn test_remove_twice_is_safe() {
        let mut store = ExperienceStore::load(memory());
        assert!(store.remove("exp-2").is_some());
        assert!(store.get("exp-2").is_none());
        assert!(store.remove("exp-2").is_none());
    }

    #[test]
    fn test_filters_by_destination_and_host() {
        let store = ExperienceStore::load(memory());
        let cebu: Vec<_> = store.for_destination("cebu").map(|e| e.id.as_str()).collect();
        assert_eq!(cebu, vec!["exp-2", "exp-3"]);
        let hosted: Vec<_> = store.hosted_by("companion-4").map(|e| e.id.as_str()).collect();
        assert_eq!(hosted, vec!["exp-2", "exp-5"]);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let storage = memory();
        {
            let mut store = ExperienceStore::load(storage.clone());
            store.add(sample("exp-new"));
            store.remove("exp-3");
        }
        let reloaded = ExperienceStore::load(storage);
        assert_eq!(reloaded.all()[0].id, "exp-new");
        assert!(reloaded.get("exp-3").is_none());
    }
}
