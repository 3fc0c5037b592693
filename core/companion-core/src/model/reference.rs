//! Read-only reference data used for display joins.
//!
//! None of these records are owned by a store; they come from the bundled seed
//! data and are looked up by id.

use serde::{Deserialize, Serialize};

use super::experience::Coordinates;
use super::identity::{Identity, TravelDates};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub vibe_statement: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDestination {
    pub destination_id: String,
    pub destination_name: String,
    pub dates: TravelDates,
}

/// Another traveller as seen when browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    #[serde(flatten)]
    pub profile: Identity,
    #[serde(default)]
    pub upcoming_destinations: Vec<UpcomingDestination>,
}

/// A companion joined with the viewer's relationship state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionView<'a> {
    #[serde(flatten)]
    pub companion: &'a Companion,
    pub has_waved: bool,
}
