use serde::{Deserialize, Deserializer};

/// Read an `f64` that may have been written as `null`.
///
/// serde_json writes non-finite floats as `null`, so a snapshot holding a
/// NaN amount comes back through here as NaN. Infinities also come back as
/// NaN.
pub(crate) fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
