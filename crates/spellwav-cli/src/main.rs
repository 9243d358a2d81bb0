//! spellwav CLI - spell text out loud as a WAV file
//!
//! This binary renders text from a directory of per-character clips and
//! inspects clip files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use spellwav_cli::commands;
use spellwav_cli::commands::say::SayArgs;
use spellwav_cli::logging;
use spellwav_spec::CapitalPlacement;

/// spellwav - Spoken-character WAV rendering
#[derive(Parser)]
#[command(name = "spellwav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text to a WAV file
    Say {
        /// Text to spell out
        text: String,

        /// Output WAV path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// JSON file with render options; flags override it
        #[arg(short, long)]
        config: Option<String>,

        /// Directory of per-character clips (default: $SPELLWAV_SOUND_DIR or <data dir>/spellwav/en)
        #[arg(short, long)]
        sound_dir: Option<String>,

        /// Mix the spoken part with itself backwards
        #[arg(long)]
        distort: bool,

        /// Add a feedback echo that rings into the trailing silence
        #[arg(long)]
        echo: bool,

        /// Where to speak the capital marker
        #[arg(long)]
        capital: Option<CapitalPlacement>,

        /// Use separate clips for upper- and lowercase letters
        #[arg(long)]
        case_sensitive: bool,

        /// Content type to report for the output
        #[arg(long)]
        content_type: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a WAV file and print its format and PCM hash
    Inspect {
        /// Path to the WAV file
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the clip files a text needs
    Filename {
        /// Characters to look up
        text: String,

        /// Use separate clips for upper- and lowercase letters
        #[arg(long)]
        case_sensitive: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Say {
            text,
            output,
            config,
            sound_dir,
            distort,
            echo,
            capital,
            case_sensitive,
            content_type,
            json,
        } => {
            let args = SayArgs {
                text,
                output,
                config,
                sound_dir,
                distort,
                echo,
                capital,
                case_sensitive,
                content_type,
            };
            commands::say::run(&args, json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Filename {
            text,
            case_sensitive,
            json,
        } => commands::filename::run(&text, case_sensitive, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
