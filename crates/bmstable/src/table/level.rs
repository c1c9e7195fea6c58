//! Level label coercion.
//!
//! Level labels arrive as JSON strings, JSON numbers, or both within one array.
//! Coercion never fails: every value kind maps to some string.

use serde_json::Value;

use crate::json::JsonKind;

/// Render one decoded level value as a label.
///
/// Strings pass through and integers use base-10. Everything else falls back to:
/// whole-valued floats as integers (`3.0` -> `"3"`), other numbers via their
/// shortest decimal form, booleans as `true`/`false`, `null` as an empty label,
/// and arrays or objects as compact JSON text.
pub fn coerce_level(value: &Value) -> String {
    match JsonKind::from(value) {
        JsonKind::Text(s) => s.to_string(),
        JsonKind::Integer(i) => i.to_string(),
        JsonKind::Sequence(_) | JsonKind::Object(_) => value.to_string(),
        JsonKind::Other(other) => fallback_label(other),
    }
}

fn fallback_label(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn coerce_level_order(values: &[Value]) -> Vec<String> {
    values.iter().map(coerce_level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_level_order() {
        let values = vec![json!("1"), json!(2), json!("3")];
        assert_eq!(coerce_level_order(&values), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_level_order() {
        assert!(coerce_level_order(&[]).is_empty());
    }

    #[test]
    fn test_strings_untouched() {
        assert_eq!(coerce_level(&json!("★24")), "★24");
        assert_eq!(coerce_level(&json!(" 01 ")), " 01 ");
        assert_eq!(coerce_level(&json!("")), "");
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce_level(&json!(0)), "0");
        assert_eq!(coerce_level(&json!(-1)), "-1");
        assert_eq!(coerce_level(&json!(99)), "99");
    }

    #[test]
    fn test_fallback_kinds() {
        assert_eq!(coerce_level(&json!(3.0)), "3");
        assert_eq!(coerce_level(&json!(2.5)), "2.5");
        assert_eq!(coerce_level(&json!(u64::MAX)), u64::MAX.to_string());
        assert_eq!(coerce_level(&json!(true)), "true");
        assert_eq!(coerce_level(&Value::Null), "");
        assert_eq!(coerce_level(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(coerce_level(&json!({"lv": 1})), r#"{"lv":1}"#);
    }
}
