//! Registration and session commands.

use std::path::{Path, PathBuf};

use dialoguer::Password;
use secrecy::{ExposeSecret, SecretString};

use artisan_connect_core::{ImagePayload, Portfolio, Specialization};
use artisan_connect_directory::models::ArtisanRegistration;
use artisan_connect_directory::{AppError, AppState};

use crate::render;

/// Arguments of the `register` command.
pub struct RegisterArgs {
    pub name: String,
    pub specialization: Specialization,
    pub location: String,
    pub images: Vec<PathBuf>,
    pub password: SecretString,
}

/// Environment variable read instead of prompting for a password.
pub const PASSWORD_ENV: &str = "AC_PASSWORD";

/// Read the password from `AC_PASSWORD`, or prompt for it without echo.
///
/// `confirm` asks for the password twice, as registration does.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the terminal prompt fails.
pub fn read_password(confirm: bool) -> Result<SecretString, AppError> {
    password_or_prompt(std::env::var(PASSWORD_ENV).ok(), confirm)
}

fn password_or_prompt(
    from_env: Option<String>,
    confirm: bool,
) -> Result<SecretString, AppError> {
    if let Some(password) = from_env {
        return Ok(SecretString::from(password));
    }

    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt
        .interact()
        .map(SecretString::from)
        .map_err(|e| AppError::BadRequest(format!("cannot read password: {e}")))
}

/// Register an artisan and log in as them.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the images are not exactly two readable files.
/// Returns `AppError::Auth` if registration or the follow-up login fails.
pub fn register(state: &AppState, args: RegisterArgs) -> Result<(), AppError> {
    let portfolio_images = load_portfolio(&args.images)?;

    let auth = state.auth();
    let artisan = auth.register(ArtisanRegistration {
        business_name: args.name,
        specialization: args.specialization,
        location: args.location,
        portfolio_images,
        password: SecretString::from(args.password.expose_secret().to_owned()),
    })?;

    auth.login(artisan.business_name.as_str(), &args.password)?;

    render::registered(&artisan.to_current_user());
    Ok(())
}

/// Log in.
///
/// # Errors
///
/// Returns `AppError::Auth` with `InvalidCredentials` if the name or password is wrong.
pub fn login(state: &AppState, name: &str, password: &SecretString) -> Result<(), AppError> {
    let artisan = state.auth().login(name, password)?;
    render::logged_in(&artisan.to_current_user());
    Ok(())
}

/// Log out. Succeeds when nobody is logged in.
///
/// # Errors
///
/// Returns `AppError::Auth` if the session cannot be cleared.
pub fn logout(state: &AppState) -> Result<(), AppError> {
    state.auth().logout()?;
    render::logged_out();
    Ok(())
}

/// Show the logged-in artisan.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` if nobody is logged in.
pub fn whoami(state: &AppState) -> Result<(), AppError> {
    let user = state
        .auth()
        .current_user()?
        .ok_or_else(|| AppError::Unauthorized("not logged in".to_string()))?;
    render::current_user(&user);
    Ok(())
}

/// Read exactly two image files into inline payloads.
fn load_portfolio(paths: &[PathBuf]) -> Result<Portfolio, AppError> {
    let [first, second] = paths else {
        return Err(AppError::BadRequest(format!(
            "please upload exactly two portfolio images (got {})",
            paths.len()
        )));
    };

    Ok([load_image(first)?, load_image(second)?])
}

fn load_image(path: &Path) -> Result<ImagePayload, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::BadRequest(format!("cannot read {}: {e}", path.display())))?;

    ImagePayload::from_bytes(mime_type_for(path), &bytes)
        .map_err(|e| AppError::BadRequest(format!("{}: {e}", path.display())))
}

/// Guess an image MIME type from the file extension.
fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}
