//! JSON-document host adapter
//!
//! Stands in for the workflow host when the nodes run from the command line.
//! A run document looks like:
//!
//! ```json
//! { "parameters": { "operation": "decimal", "count": 3 },
//!   "items": [ {}, { "min": 10, "max": 20 } ] }
//! ```
//!
//! Parameters resolve per item: the item's own field wins, then the node
//! parameter, then the description default.

use std::io::Read;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::infrastructure::ports::{ErrorReporter, ParameterError, ParameterSource};

/// Parsed run document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunInput {
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Absent means a single empty item.
    #[serde(default)]
    pub items: Option<Vec<Map<String, Value>>>,
}

impl RunInput {
    /// Read a run document; empty input is treated as `{}`.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, serde_json::Error> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .map_err(serde_json::Error::io)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&raw)
    }
}

/// Parameter source over a [`RunInput`] plus description defaults.
#[derive(Debug, Clone)]
pub struct JsonParameterSource {
    parameters: Map<String, Value>,
    items: Vec<Map<String, Value>>,
    defaults: Map<String, Value>,
}

impl JsonParameterSource {
    pub fn new(input: RunInput, defaults: Map<String, Value>) -> Self {
        Self {
            parameters: input.parameters,
            items: input.items.unwrap_or_else(|| vec![Map::new()]),
            defaults,
        }
    }
}

impl ParameterSource for JsonParameterSource {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn get_parameter(&self, name: &str, item_index: usize) -> Result<Value, ParameterError> {
        let item = self
            .items
            .get(item_index)
            .ok_or(ParameterError::ItemOutOfRange {
                item_index,
                item_count: self.items.len(),
            })?;

        [item, &self.parameters, &self.defaults]
            .into_iter()
            .find_map(|layer| layer.get(name).filter(|value| !value.is_null()))
            .cloned()
            .ok_or_else(|| ParameterError::missing(name, item_index))
    }
}

/// Fixed node name and failure policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticErrorReporter {
    node_name: String,
    continue_on_fail: bool,
}

impl StaticErrorReporter {
    pub fn new(node_name: impl Into<String>, continue_on_fail: bool) -> Self {
        Self {
            node_name: node_name.into(),
            continue_on_fail,
        }
    }
}

impl ErrorReporter for StaticErrorReporter {
    fn node_name(&self) -> String {
        self.node_name.clone()
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn defaults() -> Map<String, Value> {
        let Value::Object(map) = json!({"operation": "integer", "min": 1, "max": 100, "count": 1})
        else {
            unreachable!()
        };
        map
    }

    fn input(value: Value) -> RunInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn item_value_overrides_node_parameter_and_default() {
        let source = JsonParameterSource::new(
            input(json!({
                "parameters": {"min": 5, "max": 50},
                "items": [{}, {"max": 7}]
            })),
            defaults(),
        );

        assert_eq!(source.item_count(), 2);
        assert_eq!(source.get_parameter("max", 0).unwrap(), json!(50));
        assert_eq!(source.get_parameter("max", 1).unwrap(), json!(7));
        assert_eq!(source.get_parameter("min", 1).unwrap(), json!(5));
        assert_eq!(source.get_parameter("count", 1).unwrap(), json!(1));
    }

    #[test]
    fn absent_items_means_one_empty_item() {
        let source = JsonParameterSource::new(RunInput::default(), defaults());
        assert_eq!(source.item_count(), 1);
        assert_eq!(source.get_parameter("operation", 0).unwrap(), json!("integer"));
    }

    #[test]
    fn explicit_empty_items_runs_nothing() {
        let source = JsonParameterSource::new(input(json!({"items": []})), defaults());
        assert_eq!(source.item_count(), 0);
    }

    #[test]
    fn unknown_parameter_is_missing() {
        let source = JsonParameterSource::new(RunInput::default(), defaults());
        assert_eq!(
            source.get_parameter("decimalPlaces", 0).unwrap_err(),
            ParameterError::missing("decimalPlaces", 0)
        );
    }

    #[test]
    fn null_item_value_falls_through_to_node_parameter() {
        let source = JsonParameterSource::new(
            input(json!({"parameters": {"max": 9}, "items": [{"max": null}]})),
            defaults(),
        );
        assert_eq!(source.get_parameter("max", 0).unwrap(), json!(9));
    }

    #[test]
    fn null_falls_through_to_missing() {
        let source = JsonParameterSource::new(
            input(json!({"parameters": {"seed": null}})),
            Map::new(),
        );
        assert!(matches!(
            source.get_parameter("seed", 0),
            Err(ParameterError::Missing { .. })
        ));
    }

    #[test]
    fn out_of_range_item_is_reported() {
        let source = JsonParameterSource::new(RunInput::default(), defaults());
        assert_eq!(
            source.get_parameter("min", 3).unwrap_err(),
            ParameterError::ItemOutOfRange {
                item_index: 3,
                item_count: 1
            }
        );
    }

    #[test]
    fn reads_run_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"parameters": {{"operation": "decimal"}}, "items": [{{"count": 3}}]}}"#
        )
        .unwrap();

        let input = RunInput::from_reader(std::fs::File::open(file.path()).unwrap()).unwrap();
        assert_eq!(input.parameters["operation"], json!("decimal"));
        assert_eq!(input.items.unwrap()[0]["count"], json!(3));
    }

    #[test]
    fn blank_input_is_empty_document() {
        let input = RunInput::from_reader("  \n".as_bytes()).unwrap();
        assert_eq!(input, RunInput::default());
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        assert!(RunInput::from_reader(r#"{"params": {}}"#.as_bytes()).is_err());
    }

    #[test]
    fn static_reporter_returns_configuration() {
        let reporter = StaticErrorReporter::new("Random.org", true);
        assert_eq!(reporter.node_name(), "Random.org");
        assert!(reporter.continue_on_fail());
    }
}
