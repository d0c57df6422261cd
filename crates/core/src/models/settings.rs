use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Store configuration. Loaded from JSON or built with `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display currency code (e.g., "USD", "EUR", "PLN").
    pub currency: String,

    /// Symbol prefixed to amounts in notification text.
    pub currency_symbol: String,

    /// Delay between "Export Started" and "Export Complete", in milliseconds.
    pub export_delay_ms: u64,

    /// How many transactions the dashboard summary lists as recent.
    pub recent_transactions_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            export_delay_ms: 2000,
            recent_transactions_limit: 5,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn export_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.export_delay_ms)
    }

    /// Check the currency code is exactly three ASCII letters.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_currency(&self.currency).map(|_| ())
    }
}

/// Normalize and validate a currency code. Returns the uppercased code.
pub(crate) fn validate_currency(currency: &str) -> Result<String, CoreError> {
    let trimmed = currency.trim().to_uppercase();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::ValidationError(format!(
            "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, EUR, PLN)"
        )));
    }
    Ok(trimmed)
}
