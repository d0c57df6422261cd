use serde::{Deserialize, Serialize};

/// What the user asked to export. All three fields are free-form labels
/// taken from the export screen (e.g. "transactions", "csv", "last-month")
/// and only appear in notification text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(rename = "type")]
    pub data_type: String,
    pub format: String,
    pub date_range: String,
}

impl ExportRequest {
    pub fn new(
        data_type: impl Into<String>,
        format: impl Into<String>,
        date_range: impl Into<String>,
    ) -> Self {
        Self {
            data_type: data_type.into(),
            format: format.into(),
            date_range: date_range.into(),
        }
    }

    /// `true` when every field is filled in. The export screen refuses to
    /// submit otherwise; the store itself accepts anything.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.data_type.trim().is_empty()
            && !self.format.trim().is_empty()
            && !self.date_range.trim().is_empty()
    }
}
