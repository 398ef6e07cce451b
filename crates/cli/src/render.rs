//! Terminal output.
//!
//! `format_*` functions build the text; the other functions print it.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;

use artisan_connect_core::Specialization;
use artisan_connect_directory::AppError;
use artisan_connect_directory::models::{CurrentUser, Review};
use artisan_connect_directory::services::ArtisanProfile;

pub fn error(err: &AppError) {
    eprintln!("error: {}", err.user_message());
}

pub fn registered(user: &CurrentUser) {
    println!("Registered and logged in as {}", user.business_name);
    println!("{}", format_artisan(user));
}

pub fn logged_in(user: &CurrentUser) {
    println!("Logged in as {}", user.business_name);
}

pub fn logged_out() {
    println!("Logged out");
}

pub fn current_user(user: &CurrentUser) {
    println!("{}", format_artisan(user));
}

pub fn artisan_list(users: &[CurrentUser]) {
    print!("{}", format_artisan_list(users));
}

pub fn profile(profile: &ArtisanProfile) {
    print!("{}", format_profile(profile));
}

pub fn review_added(review: &Review) {
    println!("Review {} added", review.id);
}

pub fn review_list(reviews: &[Review]) {
    for review in reviews {
        println!("{}", format_review(review));
    }
}

pub fn specializations() {
    for spec in Specialization::ALL {
        println!("{spec}");
    }
}

/// One-line summary of an artisan.
pub fn format_artisan(user: &CurrentUser) -> String {
    format!(
        "{}  {} - {} ({})",
        user.id, user.business_name, user.specialization, user.location
    )
}

pub fn format_artisan_list(users: &[CurrentUser]) -> String {
    let mut out = String::new();
    for user in users {
        let _ = writeln!(out, "{}", format_artisan(user));
    }
    let noun = if users.len() == 1 { "result" } else { "results" };
    let _ = writeln!(out, "{} {noun}", users.len());
    out
}

pub fn format_review(review: &Review) -> String {
    let when = review.created_at().map_or_else(
        || review.timestamp.to_string(),
        |t| t.format("%Y-%m-%d %H:%M").to_string(),
    );
    format!("[{when}] {}: {}", review.author, review.comment)
}

pub fn format_profile(profile: &ArtisanProfile) -> String {
    let artisan = &profile.artisan;
    let mut out = String::new();
    let _ = writeln!(out, "{}", artisan.business_name);
    let _ = writeln!(out, "  id:             {}", artisan.id);
    let _ = writeln!(out, "  specialization: {}", artisan.specialization);
    let _ = writeln!(out, "  location:       {}", artisan.location);
    for (i, image) in artisan.portfolio_images.iter().enumerate() {
        let _ = writeln!(
            out,
            "  image {}:        {} ({} bytes encoded)",
            i + 1,
            image.mime_type().unwrap_or("unknown"),
            image.encoded_len()
        );
    }
    let _ = writeln!(out, "  reviews:        {}", profile.reviews.len());
    for review in &profile.reviews {
        let _ = writeln!(out, "    {}", format_review(review));
    }
    out
}
