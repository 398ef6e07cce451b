//! Artisan Connect CLI - browse and manage the artisan directory.
//!
//! # Usage
//!
//! ```bash
//! # Register (and log in as) a new artisan
//! ac-cli register -n "Acme Co" -s carpenter -l Riverside \
//!     --image front.jpg --image back.jpg
//!
//! # Browse and search
//! ac-cli list
//! ac-cli list -q river
//! ac-cli show <artisan-id>
//!
//! # Reviews
//! ac-cli review add -a <artisan-id> --author Ada -c "Lovely joinery"
//! ac-cli review list -a <artisan-id>
//!
//! # Session
//! ac-cli login -n "Acme Co"
//! ac-cli whoami
//! ac-cli logout
//! ```
//!
//! # Environment Variables
//!
//! - `AC_DATA_DIR` - Data directory (overridden by `--data-dir`)
//! - `AC_MIN_PASSWORD_LENGTH` - Minimum password length at registration
//! - `AC_PASSWORD` - Password for `register`/`login` (prompted for if unset)
//! - `AC_LOG_FORMAT` - `pretty` or `json`
//! - `RUST_LOG` - Log filter (default: `warn`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use artisan_connect_core::Specialization;
use artisan_connect_directory::config::LogFormat;
use artisan_connect_directory::{AppError, AppState, DirectoryConfig};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "ac-cli")]
#[command(author, version, about = "Artisan Connect directory tools")]
struct Cli {
    /// Data directory (defaults to `AC_DATA_DIR` or `.artisan-connect`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new artisan and log in as them
    Register {
        /// Business name (also the login name)
        #[arg(short, long)]
        name: String,

        /// Specialization, e.g. carpenter or "Fashion Designer"
        #[arg(short, long)]
        specialization: Specialization,

        /// Location (neighborhood, city)
        #[arg(short, long)]
        location: String,

        /// Portfolio image file; pass exactly twice
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },
    /// Log in as an existing artisan
    Login {
        /// Business name, exactly as registered
        #[arg(short, long)]
        name: String,
    },
    /// Log out
    Logout,
    /// Show the logged-in artisan
    Whoami,
    /// List artisans, optionally filtered
    List {
        /// Match against business name, location or specialization
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show an artisan's profile and reviews
    Show {
        /// Artisan ID
        id: String,
    },
    /// Manage reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// List the available specializations
    Specializations,
}

#[derive(Subcommand)]
enum ReviewAction {
    /// Leave a review on an artisan's profile
    Add {
        /// Artisan ID
        #[arg(short, long)]
        artisan: String,

        /// Your name
        #[arg(long)]
        author: String,

        /// Review text
        #[arg(short, long)]
        comment: String,
    },
    /// List reviews, newest first
    List {
        /// Only reviews for this artisan ID
        #[arg(short, long)]
        artisan: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match DirectoryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, config) {
        render::error(&e);
        std::process::exit(1);
    }
}

/// Initialize tracing with `RUST_LOG` (default `warn`).
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(cli: Cli, mut config: DirectoryConfig) -> Result<(), AppError> {
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let state = AppState::open(config)?;
    tracing::debug!(data_dir = %state.config().data_dir.display(), "Directory opened");

    match cli.command {
        Commands::Register {
            name,
            specialization,
            location,
            images,
        } => commands::session::register(
            &state,
            commands::session::RegisterArgs {
                name,
                specialization,
                location,
                images,
                password: commands::session::read_password(true)?,
            },
        ),
        Commands::Login { name } => {
            commands::session::login(&state, &name, &commands::session::read_password(false)?)
        }
        Commands::Logout => commands::session::logout(&state),
        Commands::Whoami => commands::session::whoami(&state),
        Commands::List { query } => commands::directory::list(&state, &query),
        Commands::Show { id } => commands::directory::show(&state, &id),
        Commands::Review { action } => match action {
            ReviewAction::Add {
                artisan,
                author,
                comment,
            } => commands::directory::add_review(&state, &artisan, &author, &comment),
            ReviewAction::List { artisan } => {
                commands::directory::list_reviews(&state, artisan.as_deref())
            }
        },
        Commands::Specializations => {
            render::specializations();
            Ok(())
        }
    }
}
