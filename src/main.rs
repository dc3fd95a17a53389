use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use evfleet::config::Config;
use evfleet::console::Console;
use evfleet::fleet::FleetService;
use evfleet::logging::init_logging;
use evfleet::report::{self, ReportFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "evfleet", version = env!("APP_VERSION"), about = "Electric vehicle fleet inventory")]
struct Args {
    /// Configuration file (YAML); default locations are searched otherwise
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Interactive,
    /// Print every query once and exit
    Report {
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, source) = Config::resolve(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    if let Some(level) = args.log_level {
        config.logging.level = level.clone();
        config.logging.console_level = Some(level);
        config.validate()?;
    }
    init_logging(&config.logging)?;
    info!(source = %source, "Configuration loaded");

    let fleet = config.build_fleet();
    info!(vehicles = fleet.len(), "Fleet loaded");
    let service = FleetService::new(config.thresholds.clone());

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let mut console = Console::new(
                stdin.lock(),
                io::stdout().lock(),
                fleet,
                service,
                config.report.clone(),
            );
            console.run()?;
        }
        Command::Report { format } => {
            let text = report::render(&fleet, &service, &config.report, format.into())?;
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
