use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        config_path: Option<String>,
        manifest_path: Option<String>,
        base_url: Option<String>,
        output_dir: Option<String>,
        skip_blank_lines: bool,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "stormprep",
    version,
    about = "Download the NOAA storm-events CSV archives listed in a manifest, skipping files already present"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file; built-in defaults are used when omitted"
    )]
    config: Option<String>,

    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Overrides the manifest path (one filename per line)"
    )]
    manifest: Option<String>,

    #[arg(
        short = 'b',
        long = "base-url",
        value_name = "URL",
        help = "Overrides the remote base URL filenames are appended to"
    )]
    base_url: Option<String>,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Overrides the output directory for downloaded files"
    )]
    output_dir: Option<String>,

    #[arg(
        long = "skip-blank-lines",
        help = "Drop empty manifest lines instead of treating them as filenames",
        action = ArgAction::SetTrue
    )]
    skip_blank_lines: bool,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = Command::Fetch {
        config_path: cli.config,
        manifest_path: cli.manifest,
        base_url: cli.base_url,
        output_dir: cli.output_dir,
        skip_blank_lines: cli.skip_blank_lines,
    };

    Args { command, log_level }
}
