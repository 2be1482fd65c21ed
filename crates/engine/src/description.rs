//! Node descriptions as presented to the workflow host.
//!
//! Property names double as parameter keys, so the use cases read their
//! inputs through [`params`] rather than spelling the strings again.

use std::str::FromStr;

use randorg_domain::{
    Count, DecimalPlaces, Numeric, Operation, INTEGER_RANGE_MAX, INTEGER_RANGE_MIN,
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Parameter keys shared by both nodes.
pub mod params {
    pub const OPERATION: &str = "operation";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const COUNT: &str = "count";
    pub const DECIMAL_PLACES: &str = "decimalPlaces";
}

/// Which of the two nodes to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Batches of integers or decimals over JSON-RPC.
    Range,
    /// One integer per item from the plain-text endpoint.
    SingleValue,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::SingleValue => "single",
        }
    }

    pub fn description(&self) -> NodeDescription {
        match self {
            Self::Range => range_generator(),
            Self::SingleValue => single_value_generator(),
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "range" => Ok(Self::Range),
            "single" => Ok(Self::SingleValue),
            other => Err(format!(
                "Unknown node kind: {} (expected 'range' or 'single')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub group: Vec<&'static str>,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub defaults: NodeDefaults,
    pub inputs: Vec<&'static str>,
    pub outputs: Vec<&'static str>,
    pub properties: Vec<NodeProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDefaults {
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_data_expression: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_options: Option<TypeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Options,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOption {
    pub name: &'static str,
    pub value: Operation,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOptions {
    pub min_value: Numeric,
    pub max_value: Numeric,
}

/// Show a property only when `operation` is one of the listed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayOptions {
    pub show: ShowWhen,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowWhen {
    pub operation: Vec<Operation>,
}

impl DisplayOptions {
    fn for_operations(operations: &[Operation]) -> Self {
        Self {
            show: ShowWhen {
                operation: operations.to_vec(),
            },
        }
    }
}

impl TypeOptions {
    fn between(min: impl Into<Numeric>, max: impl Into<Numeric>) -> Self {
        Self {
            min_value: min.into(),
            max_value: max.into(),
        }
    }
}

impl NodeProperty {
    fn number(display_name: &'static str, name: &'static str, default: Value) -> Self {
        Self {
            display_name,
            name,
            kind: PropertyType::Number,
            default,
            description: None,
            required: false,
            no_data_expression: false,
            options: Vec::new(),
            type_options: None,
            display_options: None,
        }
    }

    fn options(name: &'static str, default: Operation, options: Vec<PropertyOption>) -> Self {
        Self {
            display_name: "Operation",
            name,
            kind: PropertyType::Options,
            default: json!(default),
            description: None,
            required: false,
            no_data_expression: false,
            options,
            type_options: None,
            display_options: None,
        }
    }

    fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn bounded(mut self, type_options: TypeOptions) -> Self {
        self.type_options = Some(type_options);
        self
    }

    fn shown_for(mut self, operations: &[Operation]) -> Self {
        self.display_options = Some(DisplayOptions::for_operations(operations));
        self
    }
}

impl NodeDescription {
    /// Look up a property by parameter key.
    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Default value of every property, keyed by parameter name.
    pub fn parameter_defaults(&self) -> Map<String, Value> {
        self.properties
            .iter()
            .map(|p| (p.name.to_string(), p.default.clone()))
            .collect()
    }
}

/// Connection type of the host's main data flow.
const MAIN_CONNECTION: &str = "main";

/// Batch generator (integers or decimals).
pub fn range_generator() -> NodeDescription {
    let both = [Operation::Integer, Operation::Decimal];

    let mut operation = NodeProperty::options(
        params::OPERATION,
        Operation::Integer,
        vec![
            PropertyOption {
                name: "Generate Integer",
                value: Operation::Integer,
                description: "Generate random integers",
                action: Some("Generate random integers"),
            },
            PropertyOption {
                name: "Generate Decimal",
                value: Operation::Decimal,
                description: "Generate random decimal numbers",
                action: Some("Generate random decimal numbers"),
            },
        ],
    );
    operation.no_data_expression = true;

    NodeDescription {
        display_name: "Random.org",
        name: "random",
        icon: "fa:random",
        group: vec!["utility"],
        version: 1,
        subtitle: Some("={{$parameter[\"operation\"]}}"),
        description: "Generate true random numbers using Random.org API",
        defaults: NodeDefaults { name: "Random.org" },
        inputs: vec![MAIN_CONNECTION],
        outputs: vec![MAIN_CONNECTION],
        properties: vec![
            operation,
            NodeProperty::number("Minimum Value", params::MIN, json!(1))
                .describe("Minimum value (inclusive)")
                .shown_for(&both),
            NodeProperty::number("Maximum Value", params::MAX, json!(100))
                .describe("Maximum value (inclusive)")
                .shown_for(&both),
            NodeProperty::number("Number of Values", params::COUNT, json!(Count::DEFAULT))
                .describe("How many random numbers to generate")
                .bounded(TypeOptions::between(
                    i64::from(Count::MIN),
                    i64::from(Count::MAX),
                )),
            NodeProperty::number(
                "Decimal Places",
                params::DECIMAL_PLACES,
                json!(DecimalPlaces::DEFAULT),
            )
            .describe("Number of decimal places")
            .bounded(TypeOptions::between(
                i64::from(DecimalPlaces::MIN),
                i64::from(DecimalPlaces::MAX),
            ))
            .shown_for(&[Operation::Decimal]),
        ],
    }
}

/// Single integer per item via the plain-text endpoint.
pub fn single_value_generator() -> NodeDescription {
    let i32_window = TypeOptions::between(INTEGER_RANGE_MIN, INTEGER_RANGE_MAX);

    NodeDescription {
        display_name: "Random",
        name: "random",
        icon: "fa:random",
        group: vec!["transform"],
        version: 1,
        subtitle: None,
        description: "True Random Number Generator via Random.org",
        defaults: NodeDefaults { name: "Random" },
        inputs: vec![MAIN_CONNECTION],
        outputs: vec![MAIN_CONNECTION],
        properties: vec![
            NodeProperty::options(
                params::OPERATION,
                Operation::Trng,
                vec![PropertyOption {
                    name: "True Random Number Generator",
                    value: Operation::Trng,
                    description: "Generate a true random integer using Random.org",
                    action: None,
                }],
            ),
            NodeProperty::number("Min", params::MIN, json!(1))
                .describe("Minimum integer (inclusive)")
                .required()
                .bounded(i32_window),
            NodeProperty::number("Max", params::MAX, json!(60))
                .describe("Maximum integer (inclusive)")
                .required()
                .bounded(i32_window),
        ],
    }
}
