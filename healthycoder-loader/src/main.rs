use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use healthycoder_calc::{activity, bmi};
use log::{error, info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use healthycoder_loader::report::Report;
use healthycoder_loader::source::FileSource;

const LOG_CONFIG: &str = "log4rs.yml";

/// BMI and weekly activity calculators for coders
#[derive(Parser)]
#[command(name = "healthy-coder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the body mass index of one person
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in meters
        #[arg(long)]
        height: f64,
    },
    /// Tell whether a diet is recommended for one person
    Diet {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in meters
        #[arg(long)]
        height: f64,
    },
    /// Rate weekly exercise as bad, average or good
    Activity {
        #[arg(long, allow_hyphen_values = true)]
        cardio_minutes: i32,
        #[arg(long, allow_hyphen_values = true)]
        sessions: i32,
    },
    /// Load a weight,height table and report scores for everyone in it
    Report {
        #[arg(long, env = "HEALTHYCODER_INPUT", default_value = "people.csv")]
        input: PathBuf,
        /// Number of header lines to skip
        #[arg(long, default_value_t = 1)]
        skip_lines: usize,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Runs one command and returns the text to print.
fn run(command: Commands) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Commands::Bmi { weight, height } => {
            let score = bmi::compute_bmi(weight, height)?;
            format!("{:.2}", bmi::round_half_up(score, 2))
        }
        Commands::Diet { weight, height } => {
            let recommended = bmi::is_diet_recommended(weight, height)?;
            String::from(if recommended { "yes" } else { "no" })
        }
        Commands::Activity {
            cardio_minutes,
            sessions,
        } => activity::rate_activity_level(cardio_minutes, sessions)?.to_string(),
        Commands::Report {
            input,
            skip_lines,
            json,
        } => {
            info!("Loading people from {}", input.display());
            let report = Report::build(&FileSource::new(input, skip_lines))?;
            if json {
                serde_json::to_string_pretty(&report)?
            } else {
                report.to_string()
            }
        }
    };
    Ok(output)
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    init_logging()?;

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}
