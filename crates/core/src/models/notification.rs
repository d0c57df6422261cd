use serde::{Deserialize, Serialize};

/// How prominently a notification should be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    /// Shown with error styling.
    Destructive,
}

/// A transient, user-facing message emitted as a side effect of a store
/// operation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// Error-styled notification. Store operations never emit one; it is
    /// for callers that raise their own validation toasts through a sink.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    // ── Message templates ───────────────────────────────────────────

    pub(crate) fn transaction_added(label: &str, amount: &str) -> Self {
        Self::new(
            "Transaction Added",
            format!("{label} of {amount} added successfully."),
        )
    }

    pub(crate) fn transaction_updated() -> Self {
        Self::new("Transaction Updated", "Transaction has been updated successfully.")
    }

    pub(crate) fn transaction_deleted() -> Self {
        Self::new("Transaction Deleted", "Transaction has been deleted successfully.")
    }

    pub(crate) fn budget_created(category: &str) -> Self {
        Self::new(
            "Budget Created",
            format!("Budget for {category} has been created successfully."),
        )
    }

    pub(crate) fn budget_updated() -> Self {
        Self::new("Budget Updated", "Budget has been updated successfully.")
    }

    pub(crate) fn budget_deleted() -> Self {
        Self::new("Budget Deleted", "Budget has been deleted successfully.")
    }

    pub(crate) fn category_created(name: &str) -> Self {
        Self::new(
            "Category Created",
            format!("Category \"{name}\" has been created successfully."),
        )
    }

    pub(crate) fn category_updated() -> Self {
        Self::new("Category Updated", "Category has been updated successfully.")
    }

    pub(crate) fn category_deleted() -> Self {
        Self::new("Category Deleted", "Category has been deleted successfully.")
    }

    pub(crate) fn export_started(data_type: &str, format: &str, date_range: &str) -> Self {
        Self::new(
            "Export Started",
            format!("Exporting {data_type} data in {format} format for {date_range}..."),
        )
    }

    pub(crate) fn export_complete() -> Self {
        Self::new(
            "Export Complete",
            "Your data has been exported successfully. Download should start shortly.",
        )
    }
}

/// Render an amount the way notification text shows it: currency symbol,
/// then the number with no trailing zeros (`$90`, `$12.5`, `$NaN`).
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent
/// form (`$1e+21`, `$1.5e-7`).
pub fn format_amount(symbol: &str, value: f64) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{symbol}Infinity");
    }
    format!("{symbol}{}", number_text(value))
}

fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) && !value.is_nan() {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
