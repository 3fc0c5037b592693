//! Human-readable and JSON rendering.

use companion_core::model::{CompanionView, Destination, Experience, Identity, Toast, ToastVariant};
use companion_core::seed;
use serde::Serialize;

use crate::error::CliError;

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn identity(user: &Identity) {
    println!("{} <{}>  [{}]", user.name, user.email, user.id);
    println!("  {} · {} · budget {}", user.nationality, user.age_range, user.budget_band);
    if !user.travel_style.is_empty() {
        let styles: Vec<&str> = user.travel_style.iter().map(|s| s.as_str()).collect();
        println!("  style: {}", styles.join(", "));
    }
    if !user.languages.is_empty() {
        println!("  languages: {}", user.languages.join(", "));
    }
    if let Some(location) = &user.current_location {
        println!("  now in: {}", location);
    }
    if let Some(next) = &user.next_destination {
        println!("  next: {}", next);
    }
    if let Some(dates) = &user.travel_dates {
        println!("  travelling: {} → {}", dates.start, dates.end);
    }
    println!("  verification: {}", user.verification_status);
    if !user.badges.is_empty() {
        println!("  badges: {}", user.badges.join(", "));
    }
    if !user.bio.is_empty() {
        println!("  {}", user.bio);
    }
    for request in &user.join_requests {
        println!(
            "  join request: {} ({}, {})",
            request.experience_id, request.status, request.date
        );
    }
}

fn destination_name(id: &str) -> &str {
    seed::destination(id).map_or(id, |d| d.name.as_str())
}

fn host_name(id: &str) -> &str {
    seed::companion_by_id(id).map_or(id, |c| c.profile.name.as_str())
}

pub fn experience_row(exp: &Experience) {
    println!(
        "{:<30} {:<36} {:<10} {} {}  {}/{}  {}",
        exp.id,
        exp.title,
        destination_name(&exp.destination_id),
        exp.date,
        exp.time,
        exp.current_participants,
        exp.capacity,
        exp.price_level.symbol(),
    );
}

pub fn experience_detail(exp: &Experience) {
    println!("{}  [{}]", exp.title, exp.id);
    println!(
        "  {} · {} · {} · {}",
        exp.category,
        exp.vibe_tag,
        destination_name(&exp.destination_id),
        exp.price_level.symbol()
    );
    println!("  {} at {} for {}", exp.date, exp.time, exp.duration);
    println!(
        "  meet: {} ({:.4}, {:.4})",
        exp.meeting_point, exp.meeting_point_coords.lat, exp.meeting_point_coords.lng
    );
    println!("  host: {}", host_name(&exp.host_id));
    println!(
        "  joined: {}/{} ({} spots left)",
        exp.current_participants,
        exp.capacity,
        exp.spots_left()
    );
    if let Err(e) = exp.roster_check() {
        println!("  warning: {}", e);
    }
    if !exp.description.is_empty() {
        println!("  {}", exp.description);
    }
    if !exp.what_to_bring.is_empty() {
        println!("  bring: {}", exp.what_to_bring.join(", "));
    }
    for note in &exp.safety_notes {
        println!("  safety: {}", note);
    }
}

pub fn companion_row(view: &CompanionView<'_>) {
    let profile = &view.companion.profile;
    let marker = if view.has_waved { "👋" } else { "  " };
    let next = view
        .companion
        .upcoming_destinations
        .first()
        .map(|u| format!("→ {} from {}", u.destination_name, u.dates.start))
        .unwrap_or_default();
    println!(
        "{} {:<12} {:<16} {:<10} {}",
        marker, profile.id, profile.name, profile.nationality, next
    );
}

pub fn destination_row(dest: &Destination) {
    println!("{:<10} {}, {} · {}", dest.id, dest.name, dest.country, dest.vibe_statement);
}

pub fn toast(toast: &Toast) {
    let prefix = match toast.variant {
        ToastVariant::Success => "✓",
        ToastVariant::Error => "✗",
        ToastVariant::Default => "•",
    };
    match &toast.description {
        Some(description) => eprintln!("{} {} · {}", prefix, toast.title, description),
        None => eprintln!("{} {}", prefix, toast.title),
    }
}
