//! Lenient deserializers for form fields.
//!
//! Forms post whatever their widgets produce: strings, but also booleans from
//! checkboxes, numbers, or arrays from multi-selects. Any of these is accepted
//! and turned into text; `null` counts as absent. An optional field holding
//! `false` or `0` counts as absent too, so an unticked checkbox is not selected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A field that is rendered even when absent, as an empty string
pub fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.as_ref().and_then(text).unwrap_or_default())
}

/// A field that may be absent
pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.filter(|value| !is_falsy(value)).as_ref().and_then(text))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;
    use testresult::TestResult;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Form {
        #[serde(deserialize_with = "super::required")]
        name: String,

        #[serde(deserialize_with = "super::optional")]
        choice: Option<String>,
    }

    fn parse(value: serde_json::Value) -> Result<Form, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_missing_fields() -> TestResult {
        let form = parse(json!({}))?;

        assert_eq!(form.name, "");
        assert_eq!(form.choice, None);

        Ok(())
    }

    #[test]
    fn test_null_fields() -> TestResult {
        let form = parse(json!({ "name": null, "choice": null }))?;

        assert_eq!(form.name, "");
        assert_eq!(form.choice, None);

        Ok(())
    }

    #[test]
    fn test_string_fields() -> TestResult {
        let form = parse(json!({ "name": "Ana", "choice": "Fleet" }))?;

        assert_eq!(form.name, "Ana");
        assert_eq!(form.choice.as_deref(), Some("Fleet"));

        Ok(())
    }

    #[test]
    fn test_scalar_fields_become_text() -> TestResult {
        let form = parse(json!({ "name": 42, "choice": true }))?;

        assert_eq!(form.name, "42");
        assert_eq!(form.choice.as_deref(), Some("true"));

        Ok(())
    }

    #[test]
    fn test_false_and_zero_choices_are_absent() -> TestResult {
        let form = parse(json!({ "name": "Ana", "choice": false }))?;

        assert_eq!(form.choice, None);

        let form = parse(json!({ "name": "Ana", "choice": 0 }))?;

        assert_eq!(form.choice, None);

        Ok(())
    }

    #[test]
    fn test_false_and_zero_required_fields_are_text() -> TestResult {
        let form = parse(json!({ "name": false }))?;

        assert_eq!(form.name, "false");

        let form = parse(json!({ "name": 0 }))?;

        assert_eq!(form.name, "0");

        Ok(())
    }

    #[test]
    fn test_array_fields_are_joined() -> TestResult {
        let form = parse(json!({ "name": "Ana", "choice": ["Fleet", "Procurement"] }))?;

        assert_eq!(form.choice.as_deref(), Some("Fleet,Procurement"));

        Ok(())
    }
}
