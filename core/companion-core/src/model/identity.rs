//! The signed-in traveller and partial profile updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

token_enum! {
    /// Self-reported age band.
    pub enum AgeRange ("age range") {
        From20To25 => "20-25",
        From26To30 => "26-30",
        From31To35 => "31-35",
        From36To40 => "36-40",
    }
}

token_enum! {
    /// Travel style of a person, and the vibe tag of an experience.
    pub enum Vibe ("vibe") {
        Chill => "chill",
        Party => "party",
        Adventurous => "adventurous",
        Mixed => "mixed",
    }
}

token_enum! {
    pub enum BudgetBand ("budget band") {
        Low => "low",
        Mid => "mid",
        Higher => "higher",
    }
}

token_enum! {
    pub enum VerificationStatus ("verification status") {
        Basic => "basic",
        Verified => "verified",
        Trusted => "trusted",
    }
}

token_enum! {
    pub enum JoinStatus ("join status") {
        Pending => "pending",
        Accepted => "accepted",
        Declined => "declined",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A request by the signed-in traveller to join someone else's experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub experience_id: String,
    pub status: JoinStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub nationality: String,
    pub age_range: AgeRange,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Ordered set: no duplicates, first occurrence wins.
    #[serde(default)]
    pub travel_style: Vec<Vibe>,
    pub budget_band: BudgetBand,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<TravelDates>,
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub waved_companions: Vec<String>,
    #[serde(default)]
    pub join_requests: Vec<JoinRequest>,
}

impl Identity {
    pub fn has_waved(&self, companion_id: &str) -> bool {
        self.waved_companions.iter().any(|id| id == companion_id)
    }

    pub fn join_request_for(&self, experience_id: &str) -> Option<&JoinRequest> {
        self.join_requests
            .iter()
            .find(|r| r.experience_id == experience_id)
    }
}

/// Removes duplicate styles while keeping first-seen order.
pub fn dedup_styles(styles: impl IntoIterator<Item = Vibe>) -> Vec<Vibe> {
    let mut out: Vec<Vibe> = Vec::new();
    for style in styles {
        if !out.contains(&style) {
            out.push(style);
        }
    }
    out
}

/// Shallow, field-scoped patch for [`Identity`].
///
/// `None` leaves a field untouched. Fields that are optional on the identity
/// take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<Option<String>>,
    pub nationality: Option<String>,
    pub age_range: Option<AgeRange>,
    pub languages: Option<Vec<String>>,
    pub travel_style: Option<Vec<Vibe>>,
    pub budget_band: Option<BudgetBand>,
    pub bio: Option<String>,
    pub current_location: Option<Option<String>>,
    pub next_destination: Option<Option<String>>,
    pub travel_dates: Option<Option<TravelDates>>,
    pub verification_status: Option<VerificationStatus>,
    pub badges: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ProfileUpdate::default()
    }

    pub fn apply_to(self, identity: &mut Identity) {
        if let Some(v) = self.name {
            identity.name = v;
        }
        if let Some(v) = self.email {
            identity.email = v;
        }
        if let Some(v) = self.avatar {
            identity.avatar = v;
        }
        if let Some(v) = self.nationality {
            identity.nationality = v;
        }
        if let Some(v) = self.age_range {
            identity.age_range = v;
        }
        if let Some(v) = self.languages {
            identity.languages = v;
        }
        if let Some(v) = self.travel_style {
            identity.travel_style = dedup_styles(v);
        }
        if let Some(v) = self.budget_band {
            identity.budget_band = v;
        }
        if let Some(v) = self.bio {
            identity.bio = v;
        }
        if let Some(v) = self.current_location {
            identity.current_location = v;
        }
        if let Some(v) = self.next_destination {
            identity.next_destination = v;
        }
        if let Some(v) = self.travel_dates {
            identity.travel_dates = v;
        }
        if let Some(v) = self.verification_status {
            identity.verification_status = v;
        }
        if let Some(v) = self.badges {
            identity.badges = v;
        }
        if let Some(v) = self.interests {
            identity.interests = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_tokens_round_trip_through_from_str() {
        for range in AgeRange::ALL {
            assert_eq!(range.as_str().parse::<AgeRange>().unwrap(), *range);
        }
        assert_eq!(" Party ".parse::<Vibe>().unwrap(), Vibe::Party);
        assert!("luxury".parse::<BudgetBand>().is_err());
    }

    #[test]
    fn test_age_range_serializes_as_band_label() {
        let json = serde_json::to_string(&AgeRange::From26To30).unwrap();
        assert_eq!(json, "\"26-30\"");
    }

    #[test]
    fn test_update_touches_only_named_fields() {
        let before = seed::default_identity();
        let mut after = before.clone();
        ProfileUpdate {
            bio: Some("x".to_string()),
            ..Default::default()
        }
        .apply_to(&mut after);

        assert_eq!(after.bio, "x");
        let mut expected = before;
        expected.bio = "x".to_string();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_update_can_clear_optional_fields() {
        let mut identity = seed::default_identity();
        identity.current_location = Some("Cebu".to_string());
        ProfileUpdate {
            current_location: Some(None),
            ..Default::default()
        }
        .apply_to(&mut identity);
        assert!(identity.current_location.is_none());
    }

    #[test]
    fn test_travel_style_is_deduplicated() {
        let mut identity = seed::default_identity();
        ProfileUpdate {
            travel_style: Some(vec![Vibe::Chill, Vibe::Party, Vibe::Chill]),
            ..Default::default()
        }
        .apply_to(&mut identity);
        assert_eq!(identity.travel_style, vec![Vibe::Chill, Vibe::Party]);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let json = r#"{
            "id": "user-1", "name": "Mara", "email": "m@x.io",
            "nationality": "Filipino", "ageRange": "20-25",
            "budgetBand": "low", "verificationStatus": "basic"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert!(identity.waved_companions.is_empty());
        assert!(identity.join_requests.is_empty());
        assert_eq!(identity.bio, "");
    }

    #[test]
    fn test_empty_update_is_detected() {
        assert!(ProfileUpdate::default().is_empty());
        let update = ProfileUpdate {
            interests: Some(vec![]),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
