use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// What to do with inputs outside the domain of the closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject with `PricingError::InvalidParameter` before evaluating anything
    #[default]
    Strict,
    /// Evaluate as-is and let NaN/Infinity propagate
    Unchecked,
}

/// Which cumulative normal implementation the pricer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// Three-term polynomial approximation (abs error ~1e-5)
    #[default]
    Polynomial,
    /// erf-based CDF, accurate to machine precision
    Erf,
}

/// Pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PricerConfig {
    #[serde(default)]
    pub validation: ValidationPolicy,

    #[serde(default)]
    pub distribution: DistributionKind,
}

// A config file may carry other sections; only `[pricer]` is ours.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    pricer: PricerConfig,
}

impl PricerConfig {
    /// Validated inputs, polynomial CDF.
    pub fn standard() -> Self {
        Self::default()
    }

    /// No input validation. Degenerate inputs produce whatever the arithmetic produces.
    pub fn unchecked() -> Self {
        Self {
            validation: ValidationPolicy::Unchecked,
            ..Self::default()
        }
    }

    /// Validated inputs with the erf-based CDF.
    pub fn precise() -> Self {
        Self {
            distribution: DistributionKind::Erf,
            ..Self::default()
        }
    }

    /// Parse the `[pricer]` table from a TOML document. A document without one yields the
    /// defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(s).context("Failed to parse pricer config")?;
        Ok(file.pricer)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }
}
