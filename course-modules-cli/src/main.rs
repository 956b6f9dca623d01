use clap::{Parser, Subcommand};
use course_modules_cli::{load_snapshot, render_block, BlockInfo, CliError, LogConfig, Result};
use course_modules_core::config::{TZ_OFFSET_VAR, WWWROOT_VAR};
use course_modules_core::{BuiltinStrings, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "course-modules")]
#[command(
    version,
    about = "Course Modules block - render a course's activity list with completion status"
)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Disable log output entirely
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the block for one user from a course snapshot
    Render {
        /// Course snapshot (JSON)
        #[arg(short = 's', long)]
        snapshot: PathBuf,

        /// Current user ID
        #[arg(short = 'u', long)]
        user: u64,

        /// Site base URL
        #[arg(long, env = WWWROOT_VAR)]
        wwwroot: Option<String>,

        /// Offset from UTC for creation dates, in minutes
        #[arg(long, env = TZ_OFFSET_VAR, allow_hyphen_values = true)]
        tz_offset: Option<i32>,

        /// Print the full block content as JSON
        #[arg(long)]
        json: bool,

        /// Also print the sorted type labels
        #[arg(long)]
        labels: bool,
    },

    /// Show the block's title, role and applicable page formats
    Info,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let mut log_config = if self.verbose {
            LogConfig::dev()
        } else {
            LogConfig::default()
        };
        if self.log_json {
            log_config = log_config.with_json();
        }
        if self.quiet {
            log_config = log_config.without_logs();
        }
        log_config
    }
}

/// Site settings from flags, whose values clap also takes from the environment
fn site_config(wwwroot: Option<String>, tz_offset: Option<i32>) -> Config {
    let mut config = Config::default();
    if let Some(wwwroot) = wwwroot {
        config = config.with_wwwroot(wwwroot);
    }
    if let Some(offset) = tz_offset {
        config = config.with_timezone_offset(offset);
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    cli.log_config().init().map_err(CliError::Logging)?;

    match cli.command {
        Commands::Render {
            snapshot,
            user,
            wwwroot,
            tz_offset,
            json,
            labels,
        } => {
            let config = site_config(wwwroot, tz_offset);
            let rendered = render_block(load_snapshot(&snapshot)?, user, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                for item in &rendered.content.items {
                    println!("{item}");
                }
                if labels {
                    println!();
                    for (key, label) in rendered.type_labels.iter() {
                        println!("{key}\t{label}");
                    }
                }
            }
        }
        Commands::Info => {
            let info = BlockInfo::collect(&BuiltinStrings)?;
            println!("{}", info.title);
            println!("role: {}", info.aria_role);
            for (format, allowed) in info.formats.iter() {
                println!("{format}: {allowed}");
            }
            println!("privacy: {}", info.privacy);
        }
    }

    Ok(())
}
