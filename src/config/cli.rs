//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::validator::GeneratorRequest;
use super::Config;
use crate::generator::GeneratorKind;
use crate::randomness::TargetDistribution;

/// Generator method selector
///
/// `mixed` and `lehmer` are the historical alias names for the linear and
/// multiplicative recurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Linear,
    Multiplicative,
    Quadratic,
    Mixed,
    Lehmer,
    Reference,
}

impl Method {
    /// The method family this name resolves to
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Method::Linear | Method::Mixed => GeneratorKind::Linear,
            Method::Multiplicative | Method::Lehmer => GeneratorKind::Multiplicative,
            Method::Quadratic => GeneratorKind::Quadratic,
            Method::Reference => GeneratorKind::Reference,
        }
    }

    /// Name as the validator sees it (aliases preserved)
    pub fn name(&self) -> &'static str {
        match self {
            Method::Linear => "linear",
            Method::Multiplicative => "multiplicative",
            Method::Quadratic => "quadratic",
            Method::Mixed => "mixed",
            Method::Lehmer => "lehmer",
            Method::Reference => "reference",
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Goodness-of-fit target selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FitTarget {
    Uniform,
    Normal,
}

impl FitTarget {
    pub fn target(&self) -> TargetDistribution {
        match self {
            FitTarget::Uniform => TargetDistribution::Uniform,
            FitTarget::Normal => TargetDistribution::Normal,
        }
    }
}

/// randlab - congruential sequence generation and analysis
#[derive(Parser, Debug)]
#[command(name = "randlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML parameter file
    #[arg(long, global = true, env = "RANDLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print debug timing information
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a sequence and print its statistical report
    Generate(GenerateArgs),
    /// Run several seed-shifted batches and compare their statistics
    Batch(BatchArgs),
    /// Analyze numbers read from a file
    Analyze(AnalyzeArgs),
    /// Inspect and validate a delimited data file
    Inspect(InspectArgs),
    /// Check generator parameters without generating
    Validate(ParamArgs),
    /// Write the starter TOML parameter template
    Template(TemplateArgs),
}

/// Generator parameters shared by the generating subcommands
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// Generator method
    #[arg(long, value_enum)]
    pub method: Method,

    /// Seed value x0
    #[arg(long)]
    pub seed: Option<i64>,

    /// Multiplier (linear/multiplicative) or quadratic coefficient
    #[arg(short = 'a', long)]
    pub multiplier: Option<i64>,

    /// Linear coefficient (quadratic method only)
    #[arg(short = 'b', long)]
    pub linear_term: Option<i64>,

    /// Increment (linear) or constant term (quadratic)
    #[arg(short = 'c', long)]
    pub increment: Option<i64>,

    /// Modulus
    #[arg(short = 'm', long)]
    pub modulus: Option<i64>,

    /// How many numbers to generate
    #[arg(short = 'n', long)]
    pub count: Option<i64>,
}

impl ParamArgs {
    /// Fill unset parameters from the configured defaults, the same way a
    /// pre-filled parameter form would
    pub fn to_request(&self, config: &Config) -> GeneratorRequest {
        let count = Some(self.count.unwrap_or(100));
        match self.kind() {
            GeneratorKind::Linear => GeneratorRequest {
                seed: Some(self.seed.unwrap_or(config.linear.seed)),
                a: Some(self.multiplier.unwrap_or(config.linear.multiplier)),
                b: None,
                c: Some(self.increment.unwrap_or(config.linear.increment)),
                m: Some(self.modulus.unwrap_or(config.linear.modulus)),
                count,
            },
            GeneratorKind::Multiplicative => GeneratorRequest {
                seed: Some(self.seed.unwrap_or(config.multiplicative.seed)),
                a: Some(self.multiplier.unwrap_or(config.multiplicative.multiplier)),
                b: None,
                c: None,
                m: Some(self.modulus.unwrap_or(config.multiplicative.modulus)),
                count,
            },
            GeneratorKind::Quadratic => GeneratorRequest {
                seed: Some(self.seed.unwrap_or(config.quadratic.seed)),
                a: Some(self.multiplier.unwrap_or(config.quadratic.quadratic)),
                b: Some(self.linear_term.unwrap_or(config.quadratic.linear)),
                c: Some(self.increment.unwrap_or(config.quadratic.constant)),
                m: Some(self.modulus.unwrap_or(config.quadratic.modulus)),
                count,
            },
            GeneratorKind::Reference => GeneratorRequest {
                seed: Some(self.seed.unwrap_or(1)),
                a: None,
                b: None,
                c: None,
                m: None,
                count,
            },
        }
    }

    /// The method family requested
    pub fn kind(&self) -> GeneratorKind {
        self.method.kind()
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Histogram bin count
    #[arg(long, default_value = "10")]
    pub bins: usize,

    /// Significance level for the uniformity test
    #[arg(long, default_value = "0.05")]
    pub alpha: f64,

    /// Distribution target for the goodness-of-fit test
    #[arg(long, value_enum, default_value = "uniform")]
    pub fit: FitTarget,

    /// Lag for the serial-correlation statistic
    #[arg(long, default_value = "1")]
    pub lag: usize,

    /// Export the sequence as CSV into the configured results directory
    #[arg(long)]
    pub export: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Number of batches (defaults to the configured batch count)
    #[arg(long)]
    pub batches: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Export all batches as CSV into the configured results directory
    #[arg(long)]
    pub export: bool,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File of numbers, whitespace or comma separated
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Histogram bin count
    #[arg(long, default_value = "10")]
    pub bins: usize,

    /// Significance level for the uniformity test
    #[arg(long, default_value = "0.05")]
    pub alpha: f64,

    /// Distribution target for the goodness-of-fit test
    #[arg(long, value_enum, default_value = "uniform")]
    pub fit: FitTarget,

    /// Lag for the serial-correlation statistic
    #[arg(long, default_value = "1")]
    pub lag: usize,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Delimited data file: header row plus data rows
    pub file: PathBuf,

    /// Columns that must be present, comma separated
    #[arg(long)]
    pub require: Option<String>,

    /// Field delimiter; defaults by extension (tab for .tsv/.txt, comma otherwise)
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "randlab", "generate", "--method", "linear", "--seed", "1", "-a", "5", "-c", "3",
            "-m", "16", "-n", "20",
        ])
        .unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.params.method, Method::Linear);
                assert_eq!(args.params.seed, Some(1));
                assert_eq!(args.params.modulus, Some(16));
                assert_eq!(args.bins, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_alias_methods() {
        let cli =
            Cli::try_parse_from(["randlab", "validate", "--method", "lehmer"]).unwrap();
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.method, Method::Lehmer);
                assert_eq!(args.kind(), GeneratorKind::Multiplicative);
                assert_eq!(args.method.name(), "lehmer");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_to_request_applies_config_defaults() {
        let cli = Cli::try_parse_from(["randlab", "validate", "--method", "linear"]).unwrap();
        let config = Config::default();
        match cli.command {
            Command::Validate(args) => {
                let request = args.to_request(&config);
                assert_eq!(request.seed, Some(1));
                assert_eq!(request.a, Some(5));
                assert_eq!(request.c, Some(3));
                assert_eq!(request.m, Some(16));
                assert_eq!(request.count, Some(100));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_to_request_quadratic_field_mapping() {
        let cli = Cli::try_parse_from([
            "randlab", "validate", "--method", "quadratic", "-a", "3", "-b", "5", "-c", "7",
        ])
        .unwrap();
        match cli.command {
            Command::Validate(args) => {
                let request = args.to_request(&Config::default());
                assert_eq!(request.a, Some(3));
                assert_eq!(request.b, Some(5));
                assert_eq!(request.c, Some(7));
                assert_eq!(request.m, Some(65_536));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_method_required() {
        assert!(Cli::try_parse_from(["randlab", "generate"]).is_err());
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "randlab",
            "inspect",
            "data.csv",
            "--require",
            "value,score",
        ])
        .unwrap();
        match cli.command {
            Command::Inspect(args) => {
                assert_eq!(args.file, PathBuf::from("data.csv"));
                assert_eq!(args.require.as_deref(), Some("value,score"));
                assert!(args.delimiter.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
