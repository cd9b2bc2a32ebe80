use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use utmkit::prelude::*;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantCli {
    LandingPage,
    Deeplink,
}

impl From<VariantCli> for VariantKind {
    fn from(value: VariantCli) -> Self {
        match value {
            VariantCli::LandingPage => VariantKind::LandingPage,
            VariantCli::Deeplink => VariantKind::Deeplink,
        }
    }
}

/// Build UTM-tagged campaign links from form data
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON object of form field values
    form_path: Option<String>,

    /// The built-in form variant to use
    #[arg(short, long, value_enum, default_value = "landing-page")]
    variant: VariantCli,

    /// Path to a custom variant configuration JSON file (overrides --variant)
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for campaign code generation, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Copy the generated link to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Print a JSON summary instead of plain text
    #[arg(long)]
    json: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(
        short = 'i',
        long,
        help = "Run in interactive 'human' mode",
        conflicts_with_all = ["form_path", "json"]
    )]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VariantConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load variant config '{}': {}", path, e))
        }),
        None => VariantKind::from(cli.variant).config(),
    };
    let mut builder = match cli.seed {
        Some(seed) => LinkBuilder::with_rng(config, StdRng::seed_from_u64(seed)),
        None => LinkBuilder::new(config),
    };

    if cli.human {
        run_interactive(&mut builder);
    } else {
        run_non_interactive(&cli, &mut builder);
    }

    if cli.copy {
        copy_link(&mut builder);
    }
}

/// Runs the CLI in non-interactive mode, taking all values from the form file.
fn run_non_interactive(cli: &Cli, builder: &mut LinkBuilder) {
    let form_path = cli.form_path.as_deref().unwrap_or_else(|| {
        exit_with_error("Form data path is required in non-interactive mode.");
    });
    let form = FormData::from_file(form_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load form data from '{}': {}", form_path, e))
    });
    let changes = form
        .changes()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid form data: {}", e)));

    for change in changes {
        builder.apply(change);
    }

    if cli.json {
        let summary = BuildSummary::from_builder(builder);
        let json = serde_json::to_string_pretty(&summary)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode summary: {}", e)));
        println!("{}", json);
    } else {
        print_result(builder);
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(builder: &mut LinkBuilder) {
    println!("--- utmkit Interactive Mode ({}) ---", builder.config().name);

    let config = builder.config().clone();
    for field in config.fields() {
        if is_unused_custom_url(&config, builder, field) {
            continue;
        }

        let choices = dropdown_options(&config, field);
        if !choices.is_empty() {
            println!("\nOptions for {}:", field.label());
            for (index, choice) in choices.iter().enumerate() {
                println!("  {}: {}", index + 1, choice);
            }
        }

        let marker = if config.is_required(field) { " *" } else { "" };
        let raw = prompt_for_input(&format!("{}{}", field.label(), marker));
        let value = match raw.parse::<usize>() {
            Ok(index) if index >= 1 && index <= choices.len() => choices[index - 1].clone(),
            _ => raw,
        };
        builder.set_field(field, value);
    }

    println!();
    print_result(builder);
}

/// The custom URL is only asked for when the URL type defers to it.
fn is_unused_custom_url(config: &VariantConfig, builder: &LinkBuilder, field: Field) -> bool {
    match &config.destination {
        DestinationStrategy::Typed {
            type_field,
            custom_field,
            custom_sentinel,
        } => field == *custom_field && builder.get(*type_field) != custom_sentinel.as_str(),
        DestinationStrategy::Direct { .. } => false,
    }
}

fn dropdown_options(config: &VariantConfig, field: Field) -> Vec<String> {
    match field {
        Field::BusinessLine => config.options.business_lines.clone(),
        Field::Objective => config.options.objectives.clone(),
        Field::Tactic => config.options.tactics.clone(),
        Field::UrlType => config.options.url_types.clone(),
        _ => Vec::new(),
    }
}

fn print_result(builder: &LinkBuilder) {
    match builder.campaign_code() {
        Some(code) => println!("Campaign Code: {}", code),
        None => println!("Campaign Code: (not generated)"),
    }
    println!("Generated URL: {}", builder.generated_url());

    let report = builder.validation_report();
    if !report.is_complete() {
        println!("  -> {}", report);
    }
}

fn copy_link(builder: &mut LinkBuilder) {
    let mut clipboard = match SystemClipboard::new() {
        Ok(clipboard) => clipboard.holding(),
        Err(e) => {
            eprintln!("Link not copied: {}", e);
            return;
        }
    };
    if cfg!(target_os = "linux") && builder.compose().is_ok() {
        eprintln!("Keeping the link on the clipboard until something else is copied...");
    }
    match builder.copy(&mut clipboard, SystemClock.now()) {
        CopyOutcome::Copied(_) => println!("Copied!"),
        CopyOutcome::NotReady(diagnostic) => eprintln!("Link not copied: {}", diagnostic),
        CopyOutcome::ClipboardUnavailable(e) => eprintln!("Link not copied: {}", e),
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to flush stdout: {}", e)));

    io::stdin()
        .read_line(&mut line)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read line: {}", e)));
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
