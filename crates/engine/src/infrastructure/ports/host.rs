//! Host plugin ports: per-item parameter resolution and error scoping.

use serde_json::Value;

use super::error::ParameterError;

/// Resolves node parameters for each input item.
///
/// The host decides precedence (item data, node configuration, schema
/// defaults); a node only sees the resolved value.
#[cfg_attr(test, mockall::automock)]
pub trait ParameterSource: Send + Sync {
    /// Number of input items in this run.
    fn item_count(&self) -> usize;

    fn get_parameter(&self, name: &str, item_index: usize) -> Result<Value, ParameterError>;
}

/// Typed accessors over [`ParameterSource`].
pub trait ParameterSourceExt: ParameterSource {
    fn string_parameter(&self, name: &str, item_index: usize) -> Result<String, ParameterError> {
        match self.get_parameter(name, item_index)? {
            Value::String(s) => Ok(s),
            other => Err(ParameterError::wrong_type(name, "string", &other)),
        }
    }

    fn number_parameter(&self, name: &str, item_index: usize) -> Result<f64, ParameterError> {
        let value = self.get_parameter(name, item_index)?;
        value
            .as_f64()
            .ok_or_else(|| ParameterError::wrong_type(name, "number", &value))
    }
}

impl<T: ParameterSource + ?Sized> ParameterSourceExt for T {}

/// Node identity and failure policy, as configured in the host.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    /// Name errors are attributed to.
    fn node_name(&self) -> String;

    /// Whether a failing item becomes an error record instead of aborting.
    fn continue_on_fail(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_parameter_accepts_integers_and_floats() {
        let mut source = MockParameterSource::new();
        source
            .expect_get_parameter()
            .withf(|name, _| name == "min")
            .returning(|_, _| Ok(json!(3)));
        source
            .expect_get_parameter()
            .withf(|name, _| name == "max")
            .returning(|_, _| Ok(json!(7.5)));

        assert_eq!(source.number_parameter("min", 0).unwrap(), 3.0);
        assert_eq!(source.number_parameter("max", 0).unwrap(), 7.5);
    }

    #[test]
    fn number_parameter_rejects_strings() {
        let mut source = MockParameterSource::new();
        source
            .expect_get_parameter()
            .returning(|_, _| Ok(json!("10")));

        let err = source.number_parameter("count", 0).unwrap_err();
        assert!(matches!(err, ParameterError::WrongType { expected: "number", .. }));
    }

    #[test]
    fn string_parameter_propagates_missing_values() {
        let mut source = MockParameterSource::new();
        source
            .expect_get_parameter()
            .returning(|name, index| Err(ParameterError::missing(name, index)));

        let err = source.string_parameter("operation", 2).unwrap_err();
        assert_eq!(err, ParameterError::missing("operation", 2));
    }

    #[test]
    fn typed_accessors_work_through_trait_objects() {
        let mut source = MockParameterSource::new();
        source
            .expect_get_parameter()
            .returning(|_, _| Ok(json!("integer")));
        let source: &dyn ParameterSource = &source;

        assert_eq!(source.string_parameter("operation", 0).unwrap(), "integer");
    }
}
