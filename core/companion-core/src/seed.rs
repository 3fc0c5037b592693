//! Bundled seed data.
//!
//! Provides the identity template used at sign-in, the initial experience
//! collection, and the reference destinations and companions.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::model::{
    AgeRange, BudgetBand, Category, Companion, Coordinates, Destination, Experience, Identity,
    PriceLevel, TravelDates, UpcomingDestination, VerificationStatus, Vibe,
};

/// Id of the identity template. Sign-up never reuses it.
pub const SEED_USER_ID: &str = "user-1";

/// Badge granted to every new sign-up.
pub const STARTER_BADGE: &str = "Email verified";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static DEFAULT_IDENTITY: Lazy<Identity> = Lazy::new(|| Identity {
    id: SEED_USER_ID.to_string(),
    name: "Alex Rivera".to_string(),
    email: "alex@example.com".to_string(),
    avatar: None,
    nationality: "Spanish".to_string(),
    age_range: AgeRange::From26To30,
    languages: strings(&["English", "Spanish"]),
    travel_style: vec![Vibe::Adventurous, Vibe::Chill],
    budget_band: BudgetBand::Mid,
    bio: "Backpacking the islands for three months. Always up for a sunrise hike.".to_string(),
    current_location: Some("El Nido".to_string()),
    next_destination: Some("Siargao".to_string()),
    travel_dates: Some(TravelDates {
        start: date(2025, 3, 1),
        end: date(2025, 5, 31),
    }),
    verification_status: VerificationStatus::Verified,
    badges: strings(&["Email verified", "Phone verified", "Early traveller"]),
    interests: strings(&["Island hopping", "Street food", "Surfing"]),
    waved_companions: Vec::new(),
    join_requests: Vec::new(),
});

static DESTINATIONS: Lazy<Vec<Destination>> = Lazy::new(|| {
    vec![
        Destination {
            id: "el-nido".to_string(),
            name: "El Nido".to_string(),
            country: "Philippines".to_string(),
            vibe_statement: "Limestone cliffs and lagoon days".to_string(),
            coordinates: Coordinates { lat: 11.1956, lng: 119.4075 },
        },
        Destination {
            id: "siargao".to_string(),
            name: "Siargao".to_string(),
            country: "Philippines".to_string(),
            vibe_statement: "Surf by day, bonfires by night".to_string(),
            coordinates: Coordinates { lat: 9.8482, lng: 126.0458 },
        },
        Destination {
            id: "cebu".to_string(),
            name: "Cebu".to_string(),
            country: "Philippines".to_string(),
            vibe_statement: "Waterfalls, whale sharks and lechon".to_string(),
            coordinates: Coordinates { lat: 10.3157, lng: 123.8854 },
        },
        Destination {
            id: "manila".to_string(),
            name: "Manila".to_string(),
            country: "Philippines".to_string(),
            vibe_statement: "Old walls and new rooftops".to_string(),
            coordinates: Coordinates { lat: 14.5995, lng: 120.9842 },
        },
    ]
});

fn companion(
    id: &str,
    name: &str,
    nationality: &str,
    age_range: AgeRange,
    styles: &[Vibe],
    bio: &str,
    upcoming: Option<(&str, &str, NaiveDate, NaiveDate)>,
) -> Companion {
    Companion {
        profile: Identity {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            avatar: None,
            nationality: nationality.to_string(),
            age_range,
            languages: strings(&["English"]),
            travel_style: styles.to_vec(),
            budget_band: BudgetBand::Mid,
            bio: bio.to_string(),
            current_location: None,
            next_destination: upcoming.map(|(_, dest, _, _)| dest.to_string()),
            travel_dates: None,
            verification_status: VerificationStatus::Verified,
            badges: strings(&["Email verified"]),
            interests: Vec::new(),
            waved_companions: Vec::new(),
            join_requests: Vec::new(),
        },
        upcoming_destinations: upcoming
            .map(|(dest_id, dest_name, start, end)| {
                vec![UpcomingDestination {
                    destination_id: dest_id.to_string(),
                    destination_name: dest_name.to_string(),
                    dates: TravelDates { start, end },
                }]
            })
            .unwrap_or_default(),
    }
}

static COMPANIONS: Lazy<Vec<Companion>> = Lazy::new(|| {
    vec![
        companion(
            "companion-1",
            "Emma Larsen",
            "Danish",
            AgeRange::From26To30,
            &[Vibe::Chill, Vibe::Adventurous],
            "Freediver chasing calm water.",
            Some(("el-nido", "El Nido", date(2025, 3, 10), date(2025, 3, 20))),
        ),
        companion(
            "companion-2",
            "Kenji Watanabe",
            "Japanese",
            AgeRange::From31To35,
            &[Vibe::Adventurous],
            "Hiking every volcano I can find.",
            Some(("cebu", "Cebu", date(2025, 4, 2), date(2025, 4, 9))),
        ),
        companion(
            "companion-3",
            "Lucia Romano",
            "Italian",
            AgeRange::From20To25,
            &[Vibe::Party, Vibe::Mixed],
            "Here for the sunsets and the dance floors.",
            Some(("siargao", "Siargao", date(2025, 3, 15), date(2025, 4, 1))),
        ),
        companion(
            "companion-4",
            "Miguel Santos",
            "Filipino",
            AgeRange::From36To40,
            &[Vibe::Chill],
            "Local guide and home cook. Ask me about adobo.",
            None,
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn experience(
    id: &str,
    title: &str,
    destination_id: &str,
    category: Category,
    date: NaiveDate,
    time: &str,
    duration: &str,
    capacity: u32,
    price_level: PriceLevel,
    meeting_point: (&str, f64, f64),
    host_id: &str,
    guests: &[&str],
    vibe_tag: Vibe,
) -> Experience {
    let mut participant_ids = vec![host_id.to_string()];
    participant_ids.extend(guests.iter().map(|g| g.to_string()));
    Experience {
        id: id.to_string(),
        title: title.to_string(),
        destination_id: destination_id.to_string(),
        category,
        date,
        time: time.to_string(),
        duration: duration.to_string(),
        capacity,
        current_participants: participant_ids.len() as u32,
        price_level,
        description: format!("{} with fellow travellers.", title),
        what_to_bring: strings(&["Water", "Sunscreen"]),
        meeting_point: meeting_point.0.to_string(),
        meeting_point_coords: Coordinates {
            lat: meeting_point.1,
            lng: meeting_point.2,
        },
        host_id: host_id.to_string(),
        participant_ids,
        safety_notes: strings(&["Meet in the public area first"]),
        vibe_tag,
    }
}

static EXPERIENCES: Lazy<Vec<Experience>> = Lazy::new(|| {
    vec![
        experience(
            "exp-1",
            "Sunset kayak to Secret Lagoon",
            "el-nido",
            Category::Island,
            date(2025, 3, 12),
            "16:30",
            "3 hours",
            8,
            PriceLevel::Moderate,
            ("Corong-Corong beach", 11.1829, 119.3901),
            "companion-1",
            &["companion-3"],
            Vibe::Chill,
        ),
        experience(
            "exp-2",
            "Night market food crawl",
            "cebu",
            Category::Food,
            date(2025, 4, 3),
            "19:00",
            "2 hours",
            6,
            PriceLevel::Budget,
            ("Sugbo Mercado entrance", 10.3293, 123.9058),
            "companion-4",
            &["companion-2"],
            Vibe::Mixed,
        ),
        experience(
            "exp-3",
            "Osmeña Peak sunrise hike",
            "cebu",
            Category::Hike,
            date(2025, 4, 5),
            "04:00",
            "5 hours",
            10,
            PriceLevel::Budget,
            ("Dalaguete town plaza", 9.7614, 123.5350),
            "companion-2",
            &[],
            Vibe::Adventurous,
        ),
        experience(
            "exp-4",
            "Cloud 9 boardwalk bar hop",
            "siargao",
            Category::Nightlife,
            date(2025, 3, 18),
            "20:00",
            "4 hours",
            12,
            PriceLevel::Moderate,
            ("Cloud 9 boardwalk", 9.8107, 126.1655),
            "companion-3",
            &["companion-1", "companion-4"],
            Vibe::Party,
        ),
        experience(
            "exp-5",
            "Intramuros walking tour",
            "manila",
            Category::Culture,
            date(2025, 5, 2),
            "09:00",
            "3 hours",
            15,
            PriceLevel::Splurge,
            ("Fort Santiago gate", 14.5946, 120.9702),
            "companion-4",
            &[],
            Vibe::Chill,
        ),
    ]
});

/// Fresh copy of the identity template.
pub fn default_identity() -> Identity {
    DEFAULT_IDENTITY.clone()
}

/// Fresh copy of the initial experience collection.
pub fn experiences() -> Vec<Experience> {
    EXPERIENCES.clone()
}

pub fn destinations() -> &'static [Destination] {
    &DESTINATIONS
}

pub fn destination(id: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

pub fn companions() -> &'static [Companion] {
    &COMPANIONS
}

pub fn companion_by_id(id: &str) -> Option<&'static Companion> {
    COMPANIONS.iter().find(|c| c.profile.id == id)
}
