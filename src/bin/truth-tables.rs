use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use truth_tables::format::{BoolFormat, Formatter, FormatterConfig, Formatting};
use truth_tables::statement::Statement;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Mode {
    Human,
    Latex,
}

impl From<Mode> for Formatting {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Human => Formatting::Human,
            Mode::Latex => Formatting::Latex,
        }
    }
}

/// Truth tables calculator.
#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expressions to evaluate, e.g. "not A or B".
    #[arg(value_name = "EXPRESSION", required = true)]
    expressions: Vec<String>,

    /// Formatting mode.
    #[arg(short, long, value_enum, default_value = "human")]
    format: Mode,

    /// Formatting for boolean values, as '<false>,<true>' (e.g. '0,1').
    #[arg(short, long, value_name = "FALSE,TRUE")]
    bool: Option<String>,

    /// List assignments from all-true down to all-false.
    #[arg(short, long)]
    reverse: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    let bool_format = match args.bool.as_deref().map(str::parse::<BoolFormat>) {
        None => BoolFormat::default(),
        Some(Ok(bool_format)) => bool_format,
        Some(Err(e)) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let statements: Result<Vec<Statement>, _> = args.expressions.iter().map(|e| Statement::parse(e)).collect();
    let statements = match statements {
        Ok(statements) => statements,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = FormatterConfig {
        mode: args.format.into(),
        bool_format,
        reverse: args.reverse,
    };
    println!("{}", Formatter::new(&statements, config).format_table());

    Ok(ExitCode::SUCCESS)
}
