// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use kontax::app::AppModel;
use kontax::constants::app_info;
use kontax::filters::{FilterName, FxName};
use kontax::i18n;
use std::path::PathBuf;
use tracing::info;

mod cli;

#[derive(Parser)]
#[command(name = "kontax")]
#[command(about = "Film filter darkroom for the COSMIC desktop")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the filter catalog
    Filters {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Develop a photo without opening the window
    Process {
        /// Photo to develop
        input: PathBuf,

        /// Output file path (default: ~/Pictures/Kontax/KONTAX_TIMESTAMP.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Colour filter (default: the one selected in the app)
        #[arg(short, long)]
        filter: Option<FilterName>,

        /// Effect to apply, repeatable (default: the ones enabled in the app)
        #[arg(long = "fx")]
        effects: Vec<FxName>,

        /// Apply no effects at all
        #[arg(long, conflicts_with = "effects")]
        no_fx: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=kontax=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    info!(
        version = app_info::version(),
        flatpak = app_info::is_flatpak(),
        "Starting Kontax"
    );

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Filters { json }) => cli::list_filters(json),
        Some(Commands::Process {
            input,
            output,
            filter,
            effects,
            no_fx,
        }) => {
            let effects = if no_fx {
                Some(Vec::new())
            } else if effects.is_empty() {
                None
            } else {
                Some(effects)
            };
            cli::process_photo(&input, output, filter, effects)
        }
        None => run_gui(),
    }
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(180.0),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
