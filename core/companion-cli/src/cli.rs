//! Command-line surface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use companion_core::model::{
    AgeRange, BudgetBand, Category, Coordinates, ExperienceDraft, ExperienceUpdate, PriceLevel,
    ProfileUpdate, TravelDates, Vibe,
};
use companion_core::StorageConfig;

#[derive(Debug, Parser)]
#[command(name = "companion", version, about = "Travel companion state from the command line")]
pub struct Cli {
    /// Storage root (defaults to $COMPANION_HOME, then ~/.companion)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn storage_config(&self) -> StorageConfig {
        match &self.home {
            Some(dir) => StorageConfig::with_root(dir),
            None => StorageConfig::from_env(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with an email address
    SignIn { email: String },
    /// Create a new identity and sign in
    SignUp { email: String, name: String },
    SignOut,
    /// Show the signed-in identity
    Whoami,
    /// Update fields of the signed-in profile
    Profile(ProfileArgs),
    /// Wave at a companion, or take the wave back
    Wave { companion_id: String },
    /// List companions and whether you've waved
    Companions,
    Destinations,
    #[command(subcommand)]
    Experiences(ExperienceCommand),
}

#[derive(Debug, Subcommand)]
pub enum ExperienceCommand {
    List {
        /// Only experiences at this destination id
        #[arg(long)]
        destination: Option<String>,
        /// Only experiences you host
        #[arg(long)]
        mine: bool,
    },
    Show { id: String },
    /// Host a new experience
    Host(HostArgs),
    /// Edit an experience you host
    Edit {
        id: String,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete an experience you host
    Delete { id: String },
    /// Ask to join an experience
    Join { id: String },
}

fn parse_price(s: &str) -> Result<PriceLevel, String> {
    let value: u8 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    PriceLevel::try_from(value).map_err(|e| e.to_string())
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub nationality: Option<String>,
    #[arg(long)]
    pub age_range: Option<AgeRange>,
    #[arg(long)]
    pub budget: Option<BudgetBand>,
    /// Comma-separated, e.g. chill,adventurous
    #[arg(long, value_delimiter = ',')]
    pub style: Option<Vec<Vibe>>,
    #[arg(long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,
    #[arg(long, value_delimiter = ',')]
    pub interests: Option<Vec<String>>,
    #[arg(long, conflicts_with = "clear_location")]
    pub location: Option<String>,
    #[arg(long)]
    pub clear_location: bool,
    #[arg(long)]
    pub next_destination: Option<String>,
    #[arg(long, requires = "travel_end")]
    pub travel_start: Option<NaiveDate>,
    #[arg(long, requires = "travel_start")]
    pub travel_end: Option<NaiveDate>,
}

impl From<ProfileArgs> for ProfileUpdate {
    fn from(args: ProfileArgs) -> Self {
        let current_location = if args.clear_location {
            Some(None)
        } else {
            args.location.map(Some)
        };
        let travel_dates = match (args.travel_start, args.travel_end) {
            (Some(start), Some(end)) => Some(Some(TravelDates { start, end })),
            _ => None,
        };
        ProfileUpdate {
            name: args.name,
            bio: args.bio,
            nationality: args.nationality,
            age_range: args.age_range,
            budget_band: args.budget,
            travel_style: args.style,
            languages: args.languages,
            interests: args.interests,
            current_location,
            next_destination: args.next_destination.map(Some),
            travel_dates,
            ..Default::default()
        }
    }
}

#[derive(Debug, Args)]
pub struct HostArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub destination: String,
    #[arg(long)]
    pub category: Category,
    #[arg(long)]
    pub date: NaiveDate,
    /// Start time as HH:MM
    #[arg(long)]
    pub time: String,
    #[arg(long)]
    pub duration: String,
    /// Includes the host, so at least 1
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub capacity: u32,
    #[arg(long, value_parser = parse_price, default_value = "1")]
    pub price: PriceLevel,
    #[arg(long)]
    pub vibe: Vibe,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub meeting_point: String,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,
    /// Repeatable
    #[arg(long = "bring")]
    pub what_to_bring: Vec<String>,
    /// Repeatable
    #[arg(long = "safety-note")]
    pub safety_notes: Vec<String>,
}

impl From<HostArgs> for ExperienceDraft {
    fn from(args: HostArgs) -> Self {
        ExperienceDraft {
            title: args.title,
            destination_id: args.destination,
            category: args.category,
            date: args.date,
            time: args.time,
            duration: args.duration,
            capacity: args.capacity,
            price_level: args.price,
            description: args.description,
            what_to_bring: args.what_to_bring,
            meeting_point: args.meeting_point,
            meeting_point_coords: Coordinates {
                lat: args.lat,
                lng: args.lng,
            },
            safety_notes: args.safety_notes,
            vibe_tag: args.vibe,
        }
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub destination: Option<String>,
    #[arg(long)]
    pub category: Option<Category>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub capacity: Option<u32>,
    #[arg(long, value_parser = parse_price)]
    pub price: Option<PriceLevel>,
    #[arg(long)]
    pub vibe: Option<Vibe>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub meeting_point: Option<String>,
    /// Repeatable; replaces the whole list
    #[arg(long = "bring")]
    pub what_to_bring: Option<Vec<String>>,
}

impl From<EditArgs> for ExperienceUpdate {
    fn from(args: EditArgs) -> Self {
        ExperienceUpdate {
            title: args.title,
            destination_id: args.destination,
            category: args.category,
            date: args.date,
            time: args.time,
            duration: args.duration,
            capacity: args.capacity,
            price_level: args.price,
            vibe_tag: args.vibe,
            description: args.description,
            meeting_point: args.meeting_point,
            what_to_bring: args.what_to_bring,
            ..Default::default()
        }
    }
}
