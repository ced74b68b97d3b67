use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub(crate) const CONFIG_ENV: &str = "FINBOARD_CONFIG";

/// User preferences read from `config.toml`. Every field has a default, so
/// an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) currency_symbol: String,
    pub(crate) loan: LoanSettings,
    pub(crate) budget: BudgetSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LoanSettings {
    pub(crate) annual_rate_percent: Decimal,
    pub(crate) default_amount: Decimal,
    pub(crate) amount_min: Decimal,
    pub(crate) amount_max: Decimal,
    pub(crate) amount_step: Decimal,
    pub(crate) default_tenure: u32,
    pub(crate) tenure_min: u32,
    pub(crate) tenure_max: u32,
    pub(crate) tenure_step: u32,
    pub(crate) offers: Vec<LoanOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LoanOffer {
    pub(crate) lender: String,
    pub(crate) product: String,
    pub(crate) annual_rate_percent: Decimal,
}

/// Percent-used thresholds for budget colouring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BudgetSettings {
    pub(crate) warn_percent: Decimal,
    pub(crate) alert_percent: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            loan: LoanSettings::default(),
            budget: BudgetSettings::default(),
        }
    }
}

impl Default for LoanSettings {
    fn default() -> Self {
        Self {
            annual_rate_percent: Decimal::new(105, 1),
            default_amount: Decimal::from(500_000),
            amount_min: Decimal::from(50_000),
            amount_max: Decimal::from(5_000_000),
            amount_step: Decimal::from(10_000),
            default_tenure: 24,
            tenure_min: 6,
            tenure_max: 60,
            tenure_step: 6,
            offers: vec![
                LoanOffer {
                    lender: "HDFC".into(),
                    product: "Personal Loan".into(),
                    annual_rate_percent: Decimal::new(1025, 2),
                },
                LoanOffer {
                    lender: "ICICI".into(),
                    product: "Gold Loan".into(),
                    annual_rate_percent: Decimal::new(850, 2),
                },
            ],
        }
    }
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            warn_percent: Decimal::from(80),
            alert_percent: Decimal::from(90),
        }
    }
}

impl Settings {
    fn validate(&self) -> Result<()> {
        let loan = &self.loan;
        if loan.annual_rate_percent < Decimal::ZERO {
            anyhow::bail!("loan.annual_rate_percent cannot be negative");
        }
        if loan.amount_min <= Decimal::ZERO || loan.amount_min > loan.amount_max {
            anyhow::bail!("loan.amount_min must be positive and not above loan.amount_max");
        }
        if loan.amount_step <= Decimal::ZERO {
            anyhow::bail!("loan.amount_step must be greater than zero");
        }
        if loan.tenure_min == 0 || loan.tenure_min > loan.tenure_max {
            anyhow::bail!("loan.tenure_min must be at least 1 and not above loan.tenure_max");
        }
        if loan.tenure_step == 0 {
            anyhow::bail!("loan.tenure_step must be greater than zero");
        }
        if let Some(offer) = loan.offers.iter().find(|o| o.annual_rate_percent < Decimal::ZERO) {
            anyhow::bail!("offer '{}' has a negative rate", offer.lender);
        }
        if self.budget.warn_percent > self.budget.alert_percent {
            anyhow::bail!("budget.warn_percent must not exceed budget.alert_percent");
        }
        Ok(())
    }
}

pub(crate) fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "finboard", "FinBoard")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

/// `$FINBOARD_CONFIG` if set, otherwise `config.toml` in the platform config dir.
pub(crate) fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

pub(crate) fn load() -> Result<Settings> {
    load_from(&config_path()?)
}

/// Read settings from `path`. A missing file yields the defaults.
pub(crate) fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let settings: Settings = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    tracing::info!(path = %path.display(), "loaded config");
    Ok(settings)
}

pub(crate) fn to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize settings")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
