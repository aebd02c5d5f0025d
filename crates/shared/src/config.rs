//! Application configuration management.
//!
//! Every key has a default, so the calculator starts with the seed ledger and
//! seed prices when no configuration source is present.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Initial calculator state.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Output configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Initial values the calculator state is created from.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Purchase/acquisition price of the property.
    #[serde(default = "default_property_amount")]
    pub property_amount: Decimal,
    /// Sale/commercial price, the percentage denominator.
    #[serde(default = "default_commercial_price")]
    pub commercial_price: Decimal,
    /// Expense line-items in display order.
    #[serde(default = "default_expenses")]
    pub expenses: Vec<SeedExpense>,
}

/// One configured expense line-item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedExpense {
    /// Stable identifier used to address the entry when editing.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Initial amount.
    #[serde(default)]
    pub amount: Decimal,
}

impl SeedExpense {
    fn new(id: &str, name: &str, amount: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            amount: Decimal::from(amount),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            property_amount: default_property_amount(),
            commercial_price: default_commercial_price(),
            expenses: default_expenses(),
        }
    }
}

fn default_property_amount() -> Decimal {
    Decimal::from(700_000)
}

fn default_commercial_price() -> Decimal {
    Decimal::from(680_000)
}

/// The 18-entry seed ledger.
fn default_expenses() -> Vec<SeedExpense> {
    vec![
        SeedExpense::new("hipoteca", "Hipoteca", 406_740),
        SeedExpense::new("remodelacion", "Remodelación", 34_398),
        SeedExpense::new("agua", "Agua", 6_613),
        SeedExpense::new("luz", "Luz", 0),
        SeedExpense::new("predial", "Predial", 4_000),
        SeedExpense::new("avaluo", "Avalúo + Planos", 0),
        SeedExpense::new("gestion", "Gestión del crédito", 7_500),
        SeedExpense::new("isr", "ISR", 0),
        SeedExpense::new("reembolso", "Reembolso propietario", 120_000),
        SeedExpense::new("imprevistos", "Imprevistos", 0),
        SeedExpense::new("comision", "Comisión bancaria", 0),
        SeedExpense::new("eventos", "Eventos sociales", 0),
        SeedExpense::new("impuestos", "Impuestos", 0),
        SeedExpense::new("comisionistas", "Pago comisionistas", 0),
        SeedExpense::new("pago_arturo", "Pago Arturo", 0),
        SeedExpense::new("secretaria", "Secretaria", 0),
        SeedExpense::new("otros", "Imprevistos y Otros", 0),
        SeedExpense::new("remis", "Remis", 0),
    ]
}

/// Output configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DisplayConfig {
    /// How each recomputation is rendered.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering mode of the front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report table.
    #[default]
    Table,
    /// One JSON document of derived figures per render.
    Json,
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `FLIPCALC__*` environment variables.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FLIPCALC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
