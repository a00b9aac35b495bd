use serde_json::Value;

/// Coerce any value to a number, absorbing everything unparseable as `0`.
pub fn to_number(value: Option<&Value>) -> f64 {
    value.and_then(numeric).unwrap_or(0.0)
}

/// Numeric reading of a value, or `None` when it has no finite numeric meaning.
///
/// Blank strings read as `0`, booleans as `1`/`0`.
pub fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };

    number.is_finite().then_some(number)
}

/// Parse a disclosed percentage. Tolerates a trailing `%`; blank is unparseable.
pub fn parse_percentage(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|n| n.is_finite()),
        Value::String(raw) => {
            let trimmed = raw.trim().trim_end_matches('%').trim_end();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Truthiness used by boolean indicators.
///
/// Strings spelling an explicit negative ("No", "false") are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            !trimmed.is_empty()
                && !matches!(
                    trimmed.to_ascii_lowercase().as_str(),
                    "no" | "n" | "false" | "0"
                )
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Free-text disclosure, if it is a string with visible content.
pub fn non_empty_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_number_coerces_strings_and_absorbs_garbage() {
        assert_eq!(to_number(Some(&json!("1502"))), 1502.0);
        assert_eq!(to_number(Some(&json!(" 12.5 "))), 12.5);
        assert_eq!(to_number(Some(&json!("twelve"))), 0.0);
        assert_eq!(to_number(Some(&json!(""))), 0.0);
        assert_eq!(to_number(Some(&json!(true))), 1.0);
        assert_eq!(to_number(Some(&json!([1, 2]))), 0.0);
        assert_eq!(to_number(Some(&json!("NaN"))), 0.0);
        assert_eq!(to_number(None), 0.0);
    }

    #[test]
    fn parse_percentage_accepts_percent_sign() {
        assert_eq!(parse_percentage(&json!("45%")), Some(45.0));
        assert_eq!(parse_percentage(&json!(" 12.5 % ")), Some(12.5));
        assert_eq!(parse_percentage(&json!(80)), Some(80.0));
        assert_eq!(parse_percentage(&json!("")), None);
        assert_eq!(parse_percentage(&json!("about half")), None);
        assert_eq!(parse_percentage(&json!(true)), None);
    }

    #[test]
    fn truthiness_treats_explicit_negatives_as_false() {
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!("Yes"))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!({}))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!("No"))));
        assert!(!is_truthy(Some(&json!(" false "))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(None));
    }

    #[test]
    fn non_empty_text_trims() {
        assert_eq!(non_empty_text(Some(&json!("  policy  "))), Some("policy"));
        assert_eq!(non_empty_text(Some(&json!("   "))), None);
        assert_eq!(non_empty_text(Some(&json!(42))), None);
    }
}
