//! Directory browsing and review commands.

use artisan_connect_core::ArtisanId;
use artisan_connect_directory::{AppError, AppState};

use crate::render;

/// List artisans matching `query` (all when blank).
///
/// # Errors
///
/// Returns `AppError::Directory` if storage cannot be read.
pub fn list(state: &AppState, query: &str) -> Result<(), AppError> {
    let artisans = state.directory().search(query)?;
    let users: Vec<_> = artisans.iter().map(|a| a.to_current_user()).collect();
    render::artisan_list(&users);
    Ok(())
}

/// Show one artisan's profile with reviews.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no artisan has this ID.
pub fn show(state: &AppState, id: &str) -> Result<(), AppError> {
    let profile = state
        .directory()
        .profile(&ArtisanId::new(id))?
        .ok_or_else(|| AppError::NotFound(format!("artisan {id}")))?;
    render::profile(&profile);
    Ok(())
}

/// Leave a review.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no artisan has this ID.
/// Returns `AppError::Directory` if author or comment is blank.
pub fn add_review(
    state: &AppState,
    artisan: &str,
    author: &str,
    comment: &str,
) -> Result<(), AppError> {
    let directory = state.directory();
    let artisan_id = ArtisanId::new(artisan);

    // Storage accepts dangling references; the command line should not.
    if directory.find_artisan(&artisan_id)?.is_none() {
        return Err(AppError::NotFound(format!("artisan {artisan}")));
    }

    let review = directory.submit_review(artisan_id, author, comment)?;
    render::review_added(&review);
    Ok(())
}

/// List reviews, newest first.
///
/// # Errors
///
/// Returns `AppError::Directory` if storage cannot be read.
pub fn list_reviews(state: &AppState, artisan: Option<&str>) -> Result<(), AppError> {
    let artisan_id = artisan.map(ArtisanId::new);
    let reviews = state.directory().list_reviews(artisan_id.as_ref())?;
    render::review_list(&reviews);
    Ok(())
}
