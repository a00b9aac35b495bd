use crate::metrics::percentage::round_to;
use crate::record::coerce::{is_truthy, non_empty_text, numeric, parse_percentage};
use serde_json::Value;

/// How a disclosed value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    YesNo,
    Number,
    Percent,
}

/// Display text for `value`, or `None` when there is nothing to show.
pub(crate) fn render_value(value: Option<&Value>, format: Format) -> Option<String> {
    let value = value.filter(|value| !is_blank(value))?;
    match format {
        Format::Text => display_text(value),
        Format::YesNo => Some(yes_no(is_truthy(Some(value))).to_string()),
        Format::Number => match value {
            Value::Number(_) | Value::String(_) => numeric(value)
                .map(format_number)
                .or_else(|| display_text(value)),
            _ => display_text(value),
        },
        Format::Percent => parse_percentage(value)
            .map(format_percent)
            .or_else(|| display_text(value)),
    }
}

/// Plain rendering of scalars; lists of scalars are joined with commas.
pub(crate) fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::Bool(flag) => Some(yes_no(*flag).to_string()),
        Value::Number(number) => number.as_f64().map(format_number),
        Value::String(_) => non_empty_text(Some(value)).map(str::to_string),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(display_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
    }
}

/// Integral values print without a fractional part.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

pub(crate) fn format_percent(value: f64) -> String {
    format!("{}%", format_number(round_to(value, 2)))
}

pub(crate) const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(raw) => raw.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shown(value: Value, format: Format) -> Option<String> {
        render_value(Some(&value), format)
    }

    #[test]
    fn numbers_drop_trailing_zero_fraction() {
        assert_eq!(format_number(1588.0), "1588");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn booleans_render_yes_or_no() {
        assert_eq!(shown(json!(true), Format::Text).as_deref(), Some("Yes"));
        assert_eq!(shown(json!(false), Format::YesNo).as_deref(), Some("No"));
        assert_eq!(shown(json!("no"), Format::YesNo).as_deref(), Some("No"));
        assert_eq!(shown(json!("Y"), Format::YesNo).as_deref(), Some("Yes"));
    }

    #[test]
    fn blank_and_null_values_have_no_rendering() {
        assert_eq!(render_value(None, Format::Text), None);
        assert_eq!(shown(json!(null), Format::YesNo), None);
        assert_eq!(shown(json!("  "), Format::Number), None);
        assert_eq!(shown(json!({ "nested": 1 }), Format::Text), None);
        assert_eq!(shown(json!([]), Format::Text), None);
    }

    #[test]
    fn percentages_are_normalized() {
        assert_eq!(shown(json!("92%"), Format::Percent).as_deref(), Some("92%"));
        assert_eq!(
            shown(json!(12.345), Format::Percent).as_deref(),
            Some("12.35%")
        );
        assert_eq!(
            shown(json!("not tracked"), Format::Percent).as_deref(),
            Some("not tracked")
        );
    }

    #[test]
    fn numbers_accept_string_encodings() {
        assert_eq!(
            shown(json!(" 1502 "), Format::Number).as_deref(),
            Some("1502")
        );
        assert_eq!(
            shown(json!("approx. 40"), Format::Number).as_deref(),
            Some("approx. 40")
        );
        assert_eq!(
            shown(json!(["BSE", "NSE"]), Format::Text).as_deref(),
            Some("BSE, NSE")
        );
    }
}
