//! Command implementations for the grid risk CLI.
//!
//! Provides subcommands for sending a dataset to the analysis service and
//! for rendering a previously saved analysis response offline.

use clap::Subcommand;
use std::path::PathBuf;

pub mod analyze;
pub mod inspect;
pub mod pins;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Upload a consumer dataset to the analysis service and print the report
    Analyze {
        /// Dataset file (CSV or Excel) to upload
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// JSON dashboard config; defaults apply to missing fields
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Override the analysis service base URL
        #[arg(long)]
        backend_url: Option<String>,

        /// Also list consumers classed as normal
        #[arg(long)]
        show_normal: bool,

        /// Write the ranked consumers to this CSV file
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },

    /// Render a saved analysis response without contacting the service
    Inspect {
        /// Response body saved from the analysis service
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Also list consumers classed as normal
        #[arg(long)]
        show_normal: bool,

        /// Write the ranked consumers to this CSV file
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Analyze {
            file,
            config,
            backend_url,
            show_normal,
            export_csv,
        } => {
            analyze::run_analyze(
                &file,
                config.as_deref(),
                backend_url,
                show_normal,
                export_csv.as_deref(),
            )
            .await
        }
        Command::Inspect {
            input,
            show_normal,
            export_csv,
        } => inspect::run_inspect(&input, show_normal, export_csv.as_deref()),
    }
}
