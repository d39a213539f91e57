//! TOML configuration file parsing

use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from a string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config =
        ::toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Starter configuration template
///
/// A commented parameter file students can download, adjust, and feed back
/// through `--config`. Parses into a [`Config`] unchanged.
pub fn starter_template() -> &'static str {
    r#"# randlab parameter template
#
# Every section is optional; omitted values fall back to the built-in
# defaults shown here.

# Linear congruential method: x[i+1] = (a*x[i] + c) mod m
# Small classroom constants; swap in the Numerical Recipes pair
# (multiplier = 1664525, increment = 1013904223, modulus = 4294967296)
# for full-period sequences.
[linear]
seed = 1
multiplier = 5
increment = 3
modulus = 16

# Multiplicative method: x[i+1] = (a*x[i]) mod m (MINSTD parameters)
[multiplicative]
seed = 1
multiplier = 48271
modulus = 2147483647

# Quadratic method: x[i+1] = (a*x[i]^2 + b*x[i] + c) mod m
[quadratic]
seed = 1
quadratic = 1
linear = 1
constant = 1
modulus = 65536

[limits]
min_count = 10
max_count = 100000
max_rows = 100000
default_batches = 5

[output]
export_dir = "results"
preview = 10
precision = 4
"#
}
