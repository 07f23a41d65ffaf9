//! Numeric sum tool definition.
//!
//! Totals the `numbers` argument. Integer inputs are summed exactly and
//! produce an integer total whenever it fits in an `i64` or `u64`; a float
//! element, or a total outside that range, switches to `f64`.

use serde_json::{Number, Value};
use tracing::{debug, warn};

use crate::domains::tools::{Tool, ToolArgs, ToolError, ToolOutput};

const NUMBERS_MESSAGE: &str = "'numbers' must be a list of int/float values";

/// Sum tool - adds up a list of numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumTool;

impl SumTool {
    /// Tool name constant.
    pub const NAME: &'static str = "sum";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Sums numeric values.";

    /// Add up `numbers`, rejecting anything that is not a JSON number.
    pub fn total(numbers: &[Value]) -> Result<Number, ToolError> {
        let mut values = Vec::with_capacity(numbers.len());
        for value in numbers {
            match value {
                Value::Number(n) => values.push(n),
                _ => return Err(ToolError::invalid_argument(NUMBERS_MESSAGE)),
            }
        }

        if let Some(total) = integer_total(&values) {
            return Ok(total);
        }

        let total: f64 = values.iter().filter_map(|n| n.as_f64()).sum();
        Number::from_f64(total)
            .ok_or_else(|| ToolError::invalid_argument("sum of 'numbers' is not a finite number"))
    }
}

/// Exact total of integer-only input, or `None` when a float is present or
/// the total does not fit a JSON integer.
fn integer_total(values: &[&Number]) -> Option<Number> {
    let total = values.iter().try_fold(0i128, |acc, n| {
        let value = match n.as_i64() {
            Some(i) => i128::from(i),
            None => i128::from(n.as_u64()?),
        };
        acc.checked_add(value)
    })?;

    if let Ok(total) = i64::try_from(total) {
        Some(Number::from(total))
    } else {
        u64::try_from(total).ok().map(Number::from)
    }
}

impl Tool for SumTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn invoke(&self, args: &ToolArgs) -> Result<ToolOutput, ToolError> {
        let numbers = match args.get("numbers") {
            None => &[][..],
            Some(Value::Array(items)) => items.as_slice(),
            Some(_) => {
                warn!("Sum tool called with a non-list 'numbers' argument");
                return Err(ToolError::invalid_argument(NUMBERS_MESSAGE));
            }
        };

        debug!(count = numbers.len(), "Sum tool called");

        let total = Self::total(numbers)?;

        let mut output = ToolOutput::new();
        output.insert("sum".to_string(), Value::Number(total));
        output.insert("count".to_string(), Value::from(numbers.len()));
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invoke(value: Value) -> Result<Value, ToolError> {
        let args = value.as_object().cloned().unwrap();
        SumTool.invoke(&args).map(Value::Object)
    }

    #[test]
    fn test_sum_integers() {
        assert_eq!(
            invoke(json!({ "numbers": [1, 2, 3] })).unwrap(),
            json!({ "sum": 6, "count": 3 })
        );
    }

    #[test]
    fn test_sum_defaults_to_empty() {
        assert_eq!(invoke(json!({})).unwrap(), json!({ "sum": 0, "count": 0 }));
        assert_eq!(
            invoke(json!({ "numbers": [] })).unwrap(),
            json!({ "sum": 0, "count": 0 })
        );
    }

    #[test]
    fn test_sum_mixed_floats() {
        assert_eq!(
            invoke(json!({ "numbers": [1, 2.5, -0.5] })).unwrap(),
            json!({ "sum": 3.0, "count": 3 })
        );
    }

    #[test]
    fn test_sum_negative_integers_stay_integral() {
        let out = invoke(json!({ "numbers": [-5, 2] })).unwrap();
        assert!(out["sum"].is_i64());
        assert_eq!(out["sum"], json!(-3));
    }

    #[test]
    fn test_sum_large_unsigned_stays_exact() {
        let out = invoke(json!({ "numbers": [u64::MAX] })).unwrap();
        assert_eq!(out["sum"], json!(u64::MAX));
        assert!(out["sum"].is_u64());
    }

    #[test]
    fn test_sum_intermediate_overflow_stays_exact() {
        let out = invoke(json!({ "numbers": [i64::MAX, 1, -1] })).unwrap();
        assert_eq!(out["sum"], json!(i64::MAX));
        assert!(out["sum"].is_i64());

        let out = invoke(json!({ "numbers": [i64::MAX, 1] })).unwrap();
        assert_eq!(out["sum"], json!(i64::MAX as u64 + 1));
    }

    #[test]
    fn test_sum_out_of_integer_range_falls_back_to_float() {
        let out = invoke(json!({ "numbers": [u64::MAX, 1] })).unwrap();
        assert!(out["sum"].is_f64());
        assert_eq!(out["count"], json!(2));

        let out = invoke(json!({ "numbers": [i64::MIN, -1] })).unwrap();
        assert!(out["sum"].is_f64());
    }

    #[test]
    fn test_sum_result_key_order() {
        let args = json!({ "numbers": [1, 2] }).as_object().cloned().unwrap();
        let out = SumTool.invoke(&args).unwrap();
        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sum", "count"]);
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"sum":3,"count":2}"#
        );
    }

    #[test]
    fn test_sum_rejects_non_list() {
        let err = invoke(json!({ "numbers": "not-a-list" })).unwrap_err();
        assert_eq!(err, ToolError::InvalidArgument(NUMBERS_MESSAGE.to_string()));
    }

    #[test]
    fn test_sum_rejects_null() {
        assert!(matches!(
            invoke(json!({ "numbers": null })),
            Err(ToolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sum_rejects_non_numeric_element() {
        assert!(matches!(
            invoke(json!({ "numbers": [1, "x"] })),
            Err(ToolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sum_rejects_booleans() {
        assert!(matches!(
            invoke(json!({ "numbers": [true, 1] })),
            Err(ToolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sum_rejects_infinite_total() {
        assert!(matches!(
            invoke(json!({ "numbers": [1e308, 1e308] })),
            Err(ToolError::InvalidArgument(_))
        ));
    }
}
