//! Experiences: scheduled group meetups offered by a host.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::identity::Vibe;

token_enum! {
    pub enum Category ("category") {
        Food => "food",
        Island => "island",
        Nightlife => "nightlife",
        Hike => "hike",
        Culture => "culture",
    }
}

/// Relative cost, persisted as the integer 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PriceLevel {
    Budget = 1,
    Moderate = 2,
    Splurge = 3,
}

impl TryFrom<u8> for PriceLevel {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PriceLevel::Budget),
            2 => Ok(PriceLevel::Moderate),
            3 => Ok(PriceLevel::Splurge),
            other => Err(ModelError::PriceLevel(other)),
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level as u8
    }
}

impl PriceLevel {
    /// Peso signs, one per level.
    pub fn symbol(&self) -> String {
        "₱".repeat(u8::from(*self) as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    /// Not validated against the destination list.
    pub destination_id: String,
    pub category: Category,
    pub date: NaiveDate,
    /// Local start time as `HH:MM`.
    pub time: String,
    pub duration: String,
    pub capacity: u32,
    pub current_participants: u32,
    pub price_level: PriceLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub what_to_bring: Vec<String>,
    pub meeting_point: String,
    pub meeting_point_coords: Coordinates,
    pub host_id: String,
    #[serde(default)]
    pub participant_ids: Vec<String>,
    #[serde(default)]
    pub safety_notes: Vec<String>,
    pub vibe_tag: Vibe,
}

impl Experience {
    pub fn is_hosted_by(&self, user_id: &str) -> bool {
        self.host_id == user_id
    }

    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.current_participants)
    }

    /// Reports whether the participant bookkeeping is consistent.
    ///
    /// The store accepts records that fail this check; it is up to callers to
    /// reject them.
    pub fn roster_check(&self) -> Result<(), ModelError> {
        if self.current_participants > self.capacity {
            return Err(ModelError::OverCapacity {
                participants: self.current_participants,
                capacity: self.capacity,
            });
        }
        if self.participant_ids.len() != self.current_participants as usize {
            return Err(ModelError::RosterMismatch {
                count: self.current_participants,
                ids: self.participant_ids.len(),
            });
        }
        Ok(())
    }
}

/// Host-supplied fields for a new experience.
///
/// Id, host and roster are filled in by [`ExperienceDraft::into_experience`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceDraft {
    pub title: String,
    pub destination_id: String,
    pub category: Category,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    pub capacity: u32,
    pub price_level: PriceLevel,
    pub description: String,
    pub what_to_bring: Vec<String>,
    pub meeting_point: String,
    pub meeting_point_coords: Coordinates,
    pub safety_notes: Vec<String>,
    pub vibe_tag: Vibe,
}

impl ExperienceDraft {
    /// Builds the record with the host as its first participant.
    pub fn into_experience(self, id: String, host_id: &str) -> Experience {
        Experience {
            id,
            title: self.title,
            destination_id: self.destination_id,
            category: self.category,
            date: self.date,
            time: self.time,
            duration: self.duration,
            capacity: self.capacity,
            current_participants: 1,
            price_level: self.price_level,
            description: self.description,
            what_to_bring: self.what_to_bring,
            meeting_point: self.meeting_point,
            meeting_point_coords: self.meeting_point_coords,
            host_id: host_id.to_string(),
            participant_ids: vec![host_id.to_string()],
            safety_notes: self.safety_notes,
            vibe_tag: self.vibe_tag,
        }
    }
}

/// Shallow, field-scoped patch for [`Experience`]. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceUpdate {
    pub title: Option<String>,
    pub destination_id: Option<String>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub capacity: Option<u32>,
    pub current_participants: Option<u32>,
    pub price_level: Option<PriceLevel>,
    pub description: Option<String>,
    pub what_to_bring: Option<Vec<String>>,
    pub meeting_point: Option<String>,
    pub meeting_point_coords: Option<Coordinates>,
    pub host_id: Option<String>,
    pub participant_ids: Option<Vec<String>>,
    pub safety_notes: Option<Vec<String>>,
    pub vibe_tag: Option<Vibe>,
}

impl ExperienceUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ExperienceUpdate::default()
    }

    pub fn apply_to(self, experience: &mut Experience) {
        if let Some(v) = self.title {
            experience.title = v;
        }
        if let Some(v) = self.destination_id {
            experience.destination_id = v;
        }
        if let Some(v) = self.category {
            experience.category = v;
        }
        if let Some(v) = self.date {
            experience.date = v;
        }
        if let Some(v) = self.time {
            experience.time = v;
        }
        if let Some(v) = self.duration {
            experience.duration = v;
        }
        if let Some(v) = self.capacity {
            experience.capacity = v;
        }
        if let Some(v) = self.current_participants {
            experience.current_participants = v;
        }
        if let Some(v) = self.price_level {
            experience.price_level = v;
        }
        if let Some(v) = self.description {
            experience.description = v;
        }
        if let Some(v) = self.what_to_bring {
            experience.what_to_bring = v;
        }
        if let Some(v) = self.meeting_point {
            experience.meeting_point = v;
        }
        if let Some(v) = self.meeting_point_coords {
            experience.meeting_point_coords = v;
        }
        if let Some(v) = self.host_id {
            experience.host_id = v;
        }
        if let Some(v) = self.participant_ids {
            experience.participant_ids = v;
        }
        if let Some(v) = self.safety_notes {
            experience.safety_notes = v;
        }
        if let Some(v) = self.vibe_tag {
            experience.vibe_tag = v;
        }
    }
}
