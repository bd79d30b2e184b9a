//! Utils

use std::num::NonZeroU32;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// A `PRODUCT_ID[:QUANTITY]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Product id
    pub product_id: String,

    /// Units to add
    pub quantity: NonZeroU32,
}

impl std::str::FromStr for CartEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product_id, quantity) = match s.split_once(':') {
            Some((product_id, quantity)) => {
                let quantity = quantity
                    .parse::<NonZeroU32>()
                    .map_err(|err| format!("invalid quantity in '{s}': {err}"))?;

                (product_id, quantity)
            }
            None => (s, NonZeroU32::MIN),
        };

        if product_id.is_empty() {
            return Err(format!("missing product id in '{s}'"));
        }

        Ok(Self {
            product_id: product_id.to_string(),
            quantity,
        })
    }
}

/// Arguments for the cart example
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// Fixture set to load the store from
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Products to add, as `PRODUCT_ID[:QUANTITY]`; defaults to every
    /// on-sale product
    pub items: Vec<CartEntry>,

    /// Logging
    #[command(flatten)]
    pub logging: LoggingConfig,
}
