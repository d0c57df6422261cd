// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad float".into());
        assert_eq!(err.to_string(), "Serialization error: bad float");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("currency too long".into());
        assert_eq!(err.to_string(), "Validation failed: currency too long");
    }

    #[test]
    fn invalid_value() {
        let err = CoreError::InvalidValue {
            field: "period".into(),
            value: "daily".into(),
        };
        assert_eq!(err.to_string(), "Invalid value for period: 'daily'");
    }

    #[test]
    fn invalid_value_from_parse_keeps_raw_input() {
        let err = " Fortnightly ".parse::<finance_tracker_core::models::budget::BudgetPeriod>().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidValue { ref field, ref value } if field == "period" && value == " Fortnightly "
        ));
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_converts() {
        fn parse(input: &str) -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str(input)?)
        }
        assert!(parse("[1, 2]").is_ok());
        assert!(matches!(parse("[1, 2"), Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::ValidationError("x".into()));
        assert_eq!(err.to_string(), "Validation failed: x");
    }
}
