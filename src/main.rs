use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use compquad::configuration::Configuration;
use compquad::math::quadrature::methoddescriptor::MethodDescriptor;
use compquad::presentation::calculationsession::{CalculationSession, PLACEHOLDER};
use compquad::presentation::inputvalidation::RawCalculationInput;
use compquad::presentation::presets::{find_preset, PRESETS};

#[derive(Parser, Debug)]
#[command(
    name = "compquad",
    version,
    about = "Definite integrals with the Trapezoidal, Simpson 1/3 and Simpson 3/8 rules"
)]
struct Cli {
    /// JSON configuration file (curve_steps, display_digits, method_descriptors)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate a function of x over [lower, upper]
    Integrate(IntegrateArgs),

    /// Show the descriptor of one method, or of all methods
    Describe {
        /// trapezoidal, simpson13 or simpson38
        method: Option<String>,
    },

    /// List the built-in examples, or run one of them
    Example {
        name: Option<String>,

        /// Print the full report (including chart points) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read `function | lower | upper | n | method` lines from stdin
    Session,
}

#[derive(Args, Debug)]
struct IntegrateArgs {
    /// Expression in x, e.g. "x^2", "sin(x)", "exp(-x^2)"
    #[arg(long, short = 'f')]
    function: String,

    #[arg(long, short = 'a', allow_hyphen_values = true)]
    lower: String,

    #[arg(long, short = 'b', allow_hyphen_values = true)]
    upper: String,

    #[arg(long, short = 'n', allow_hyphen_values = true)]
    subdivisions: String,

    #[arg(long, short = 'm', default_value = "trapezoidal")]
    method: String,

    /// Print the full report (including chart points) as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("compquad=warn")),
        )
        .init();

    let cli = Cli::parse();
    let configuration = match &cli.config {
        Some(path) => Configuration::from_reader(path).with_context(|| format!("failed to load configuration from {path}"))?,
        None => Configuration::new(),
    };

    match cli.command {
        Command::Integrate(args) => {
            let input = RawCalculationInput::new(&args.function, &args.lower, &args.upper, &args.subdivisions, &args.method);
            run_once(&configuration, &input, args.json)
        }
        Command::Describe { method } => describe(&configuration, method.as_deref()),
        Command::Example { name: None, .. } => {
            for preset in &PRESETS {
                println!(
                    "{:<12} {:<22} [{}, {}] n={} {}",
                    preset.name, preset.function, preset.lower, preset.upper, preset.subdivisions, preset.method
                );
            }
            Ok(())
        }
        Command::Example { name: Some(name), json } => {
            let preset = find_preset(&name).with_context(|| format!("unknown example '{name}'"))?;
            run_once(&configuration, &preset.to_input(), json)
        }
        Command::Session => run_session(&configuration),
    }
}

fn run_once(configuration: &Configuration, input: &RawCalculationInput, json: bool) -> Result<()> {
    let mut session = CalculationSession::new(configuration);
    let rendered = match session.calculate(input) {
        Ok(report) if json => Some(format!("{}\n", serde_json::to_string_pretty(report)?)),
        Ok(report) => Some(report.render_text()),
        Err(_) => None,
    };
    match rendered {
        Some(text) => {
            print!("{text}");
            Ok(())
        }
        None => {
            let display = session.display();
            println!("Result: {}", display.value());
            bail!("{}", display.message())
        }
    }
}

fn describe(configuration: &Configuration, method: Option<&str>) -> Result<()> {
    let registry = configuration.method_registry();
    match method {
        Some(id) => print_descriptor(registry.describe_id(id)?),
        None => {
            for descriptor in registry.descriptors() {
                print_descriptor(descriptor);
                println!();
            }
        }
    }
    Ok(())
}

fn print_descriptor(descriptor: &MethodDescriptor) {
    println!("{} ({})", descriptor.name(), descriptor.method());
    println!("Formula: {}", descriptor.formula());
    println!("Description: {}", descriptor.description());
    println!("{}", descriptor.precision());
    println!("Recommendation: {}", descriptor.recommendation());
}

fn run_session(configuration: &Configuration) -> Result<()> {
    let mut session = CalculationSession::new(configuration);
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let [function, lower, upper, subdivisions, method] = fields[..] else {
            println!("Result: {PLACEHOLDER} | ⚠ expected 5 fields separated by '|', got {}", fields.len());
            continue;
        };
        let outcome = session
            .calculate(&RawCalculationInput::new(function, lower, upper, subdivisions, method))
            .map(|report| format!("{} | {} [{}]", report.formatted_value(), report.function(), report.method()));
        match (outcome, session.last_report()) {
            (Ok(summary), _) => println!("Result: {summary}"),
            (Err(error), Some(report)) => println!(
                "Result: {PLACEHOLDER} | ⚠ {error} | last good: {} = {}",
                report.function(),
                report.formatted_value()
            ),
            (Err(error), None) => println!("Result: {PLACEHOLDER} | ⚠ {error}"),
        }
    }
    Ok(())
}
