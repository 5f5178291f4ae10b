use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};

use tally::OutputFormat;
use tally::core::Calculator;
use tally::core::config::{self, ResolvedConfig};
use tally::keypad::{self, script};

#[derive(Parser)]
#[command(name = "tally", about = "Keypad calculator")]
struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one expression (× and ÷ are accepted)
    Eval {
        expression: String,
        #[arg(short, long, default_value_t, value_enum)]
        format: OutputFormat,
    },
    /// Replay a key sequence and print the input and result lines
    Keys { sequence: String },
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("tally: {e}, using defaults");
        config::TallyConfig::default()
    });
    let resolved = config::resolve(&file_config, args.log_level.as_deref());
    init_logging(&resolved);

    log::info!("Tally starting up with limits {:?}", resolved.limits);

    match args.command {
        None => keypad::run(&resolved),
        Some(Command::Eval { expression, format }) => {
            let report = script::eval_report(&expression);
            match format {
                OutputFormat::Plain => println!("{}", report.result),
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
            }
            Ok(())
        }
        Some(Command::Keys { sequence }) => {
            let mut calc = Calculator::from_config(&resolved);
            for rejection in script::replay(&mut calc, &sequence) {
                eprintln!("tally: {rejection}");
            }
            println!("{}", calc.input);
            println!("{}", calc.result);
            Ok(())
        }
    }
}

/// File logger: stdout belongs to results and the keypad screen.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
