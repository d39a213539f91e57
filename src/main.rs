//! randlab CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use randlab::config::cli::{
    AnalyzeArgs, BatchArgs, Cli, Command, GenerateArgs, InspectArgs, OutputFormat, ParamArgs,
    TemplateArgs,
};
use randlab::config::validator::{validate_dataset, validate_generator};
use randlab::config::{toml as config_toml, Config};
use randlab::dataset::Dataset;
use randlab::generator::{generate, run_batches, GeneratorSpec};
use randlab::output::{csv, text, AnalysisReport};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    if cli.debug {
        eprintln!(
            "DEBUG TIMING: startup: {:.3}s",
            start.elapsed().as_secs_f64()
        );
    }

    match &cli.command {
        Command::Generate(args) => run_generate(args, &config),
        Command::Batch(args) => run_batch(args, &config),
        Command::Analyze(args) => run_analyze(args, &config),
        Command::Inspect(args) => run_inspect(args, &config),
        Command::Validate(args) => run_validate(args, &config),
        Command::Template(args) => run_template(args),
    }?;

    if cli.debug {
        eprintln!("DEBUG TIMING: total: {:.3}s", start.elapsed().as_secs_f64());
    }
    Ok(())
}

/// Load the TOML parameter file when one is given, defaults otherwise
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => config_toml::parse_toml_file(path),
        None => Ok(Config::default()),
    }
}

fn banner(format: OutputFormat) {
    if format == OutputFormat::Text {
        println!("randlab v{}", env!("CARGO_PKG_VERSION"));
        println!();
    }
}

/// Validate, generate, analyze, report
fn run_generate(args: &GenerateArgs, config: &Config) -> Result<()> {
    banner(args.format);
    let (spec, count) = checked_spec(&args.params, config)?;
    let values = generate(&spec, count);

    let report = AnalysisReport::build(
        args.params.method.name(),
        values,
        args.bins,
        args.alpha,
        args.fit.target(),
        args.lag,
    );

    match args.format {
        OutputFormat::Text => {
            text::print_analysis(&report, config.output.precision, config.output.preview)
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if args.export {
        let path =
            csv::export_sequence(&config.output.export_dir, &report.method, &report.sequence)?;
        eprintln!("Exported {} values to {}", report.count, path.display());
    }
    Ok(())
}

/// Validate, run seed-shifted batches, report per-batch and pooled statistics
fn run_batch(args: &BatchArgs, config: &Config) -> Result<()> {
    banner(args.format);
    let (spec, count) = checked_spec(&args.params, config)?;
    let n_batches = args.batches.unwrap_or(config.limits.default_batches);
    let outcome = run_batches(&spec, count, n_batches);

    match args.format {
        OutputFormat::Text => {
            text::print_batch_summary(&outcome, args.params.method.name(), config.output.precision)
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    if args.export {
        let path =
            csv::export_batches(&config.output.export_dir, args.params.method.name(), &outcome)?;
        eprintln!("Exported {} values to {}", outcome.total_values(), path.display());
    }
    Ok(())
}

/// Analyze numbers read from a file
fn run_analyze(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    banner(args.format);
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read data file: {}", args.file.display()))?;
    let (values, skipped) = parse_numbers(&contents);
    if skipped > 0 {
        eprintln!("Warning: skipped {skipped} non-numeric token(s)");
    }

    let report = AnalysisReport::build(
        "sample",
        values,
        args.bins,
        args.alpha,
        args.fit.target(),
        args.lag,
    );
    match args.format {
        OutputFormat::Text => {
            text::print_analysis(&report, config.output.precision, config.output.preview)
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Parse and validate a delimited data file, then summarize it
fn run_inspect(args: &InspectArgs, config: &Config) -> Result<()> {
    banner(args.format);
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read data file: {}", args.file.display()))?;
    let delimiter = args
        .delimiter
        .unwrap_or_else(|| delimiter_for(&args.file));
    let dataset = Dataset::from_delimited(&contents, delimiter);

    if dataset.row_count() > config.limits.max_rows {
        eprintln!(
            "Warning: dataset has {} rows, above the configured limit of {}",
            dataset.row_count(),
            config.limits.max_rows
        );
    }

    let required: Vec<&str> = match &args.require {
        Some(list) => list.split(',').map(str::trim).collect(),
        None => Vec::new(),
    };
    let report = validate_dataset(&dataset, &required);
    let summary = dataset.summarize();

    match args.format {
        OutputFormat::Text => text::print_dataset_summary(&summary, &report),
        OutputFormat::Json => {
            let document = serde_json::json!({
                "summary": summary,
                "validation": report,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    if !report.is_valid {
        std::process::exit(2);
    }
    Ok(())
}

/// Print the validation report without generating anything
fn run_validate(args: &ParamArgs, config: &Config) -> Result<()> {
    let request = args.to_request(config);
    let report = validate_generator(args.method.name(), &request);
    text::print_validation(&report);
    if !report.is_valid {
        std::process::exit(2);
    }
    Ok(())
}

/// Write the starter TOML template to stdout or a file
fn run_template(args: &TemplateArgs) -> Result<()> {
    let template = config_toml::starter_template();
    match &args.output {
        Some(path) => {
            std::fs::write(path, template)
                .with_context(|| format!("Failed to write template: {}", path.display()))?;
            eprintln!("Template written to {}", path.display());
        }
        None => print!("{template}"),
    }
    Ok(())
}

/// Validate the request and resolve it into a runnable spec
fn checked_spec(params: &ParamArgs, config: &Config) -> Result<(GeneratorSpec, usize)> {
    let request = params.to_request(config);
    let report = validate_generator(params.method.name(), &request);
    if !report.is_valid {
        text::print_validation(&report);
        std::process::exit(2);
    }
    let spec = GeneratorSpec::from_request(params.kind(), &request);
    let count = request.count.unwrap_or(10).max(0) as usize;
    Ok((spec, count))
}

/// Pull every parseable number out of free-form text
///
/// Returns the values plus how many tokens were skipped.
fn parse_numbers(contents: &str) -> (Vec<f64>, usize) {
    let mut values = Vec::new();
    let mut skipped = 0;
    for token in contents.split(|c: char| c.is_whitespace() || c == ',' || c == ';') {
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => skipped += 1,
        }
    }
    (values, skipped)
}

/// Tab for .tsv/.txt files, comma for everything else
fn delimiter_for(path: &Path) -> char {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") | Some("txt") => '\t',
        _ => ',',
    }
}
