//! Application state and composition.

use std::sync::Arc;

use randorg_domain::NodeItem;

use crate::description::NodeKind;
use crate::infrastructure::{
    clock::SystemClock,
    http_client::ReqwestHttpClient,
    ports::{ClockPort, ErrorReporter, HttpClient, HttpError, ParameterSource},
    settings::RandomOrgSettings,
};
use crate::use_cases::{NodeOperationError, RangeGenerator, SingleValueGenerator};

/// Both nodes wired against one transport and clock.
pub struct App {
    pub range: RangeGenerator,
    pub single_value: SingleValueGenerator,
    settings: RandomOrgSettings,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        http: Arc<dyn HttpClient>,
        clock: Arc<dyn ClockPort>,
        settings: RandomOrgSettings,
    ) -> Self {
        let range = RangeGenerator::new(
            http.clone(),
            clock.clone(),
            settings.json_rpc_url.clone(),
            settings.api_key.clone(),
        );
        let single_value = SingleValueGenerator::new(http, clock, settings.integers_url.clone());

        Self {
            range,
            single_value,
            settings,
        }
    }

    /// Production wiring: reqwest with the configured timeout and the system clock.
    pub fn from_settings(settings: RandomOrgSettings) -> Result<Self, HttpError> {
        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(settings.timeout)?);
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        Ok(Self::new(http, clock, settings))
    }

    pub fn settings(&self) -> &RandomOrgSettings {
        &self.settings
    }

    /// Name errors are attributed to: the configured override, else the
    /// node's default display name.
    pub fn node_name(&self, kind: NodeKind) -> String {
        self.settings
            .node_name
            .clone()
            .unwrap_or_else(|| kind.description().defaults.name.to_string())
    }

    pub async fn run(
        &self,
        kind: NodeKind,
        params: &dyn ParameterSource,
        reporter: &dyn ErrorReporter,
    ) -> Result<Vec<NodeItem>, NodeOperationError> {
        tracing::info!(node = %kind, items = params.item_count(), "Running node");
        match kind {
            NodeKind::Range => self.range.execute(params, reporter).await,
            NodeKind::SingleValue => self.single_value.execute(params, reporter).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::json_host::{JsonParameterSource, RunInput, StaticErrorReporter};
    use crate::infrastructure::ports::MockHttpClient;
    use chrono::{TimeZone, Utc};
    use randorg_domain::ItemOutput;
    use serde_json::json;

    fn build_app(http: MockHttpClient, settings: RandomOrgSettings) -> App {
        App::new(
            Arc::new(http),
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap(),
            )),
            settings,
        )
    }

    fn source(kind: NodeKind, input: serde_json::Value) -> JsonParameterSource {
        JsonParameterSource::new(
            serde_json::from_value::<RunInput>(input).unwrap(),
            kind.description().parameter_defaults(),
        )
    }

    #[tokio::test]
    async fn range_run_uses_configured_endpoint_and_key() {
        let mut http = MockHttpClient::new();
        http.expect_post_json()
            .withf(|url, body| {
                url == "http://localhost:9000/invoke" && body["params"]["apiKey"] == "secret"
            })
            .times(1)
            .returning(|_, _| Ok(json!({"result": {"random": {"data": [17]}}})));

        let settings = RandomOrgSettings {
            json_rpc_url: "http://localhost:9000/invoke".to_string(),
            api_key: Some("secret".to_string()),
            ..RandomOrgSettings::default()
        };
        let app = build_app(http, settings);
        let reporter = StaticErrorReporter::new(app.node_name(NodeKind::Range), false);

        let items = app
            .run(NodeKind::Range, &source(NodeKind::Range, json!({})), &reporter)
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0].json, ItemOutput::Range(r) if r.values.len() == 1));
    }

    #[tokio::test]
    async fn single_value_run_uses_description_defaults() {
        let mut http = MockHttpClient::new();
        http.expect_get_text()
            .withf(|url, _| url.contains("min=1&max=60"))
            .times(1)
            .returning(|_, _| Ok("7\n".to_string()));

        let app = build_app(http, RandomOrgSettings::default());
        let reporter = StaticErrorReporter::new(app.node_name(NodeKind::SingleValue), false);

        let items = app
            .run(
                NodeKind::SingleValue,
                &source(NodeKind::SingleValue, json!({})),
                &reporter,
            )
            .await
            .unwrap();

        assert!(matches!(&items[0].json, ItemOutput::SingleValue(r) if r.value == 7));
    }

    #[tokio::test]
    async fn failure_is_attributed_to_node_name() {
        let app = build_app(MockHttpClient::new(), RandomOrgSettings::default());
        let reporter = StaticErrorReporter::new(app.node_name(NodeKind::SingleValue), false);

        let err = app
            .run(
                NodeKind::SingleValue,
                &source(NodeKind::SingleValue, json!({"parameters": {"min": 9, "max": 3}})),
                &reporter,
            )
            .await
            .unwrap_err();

        assert_eq!(err.node, "Random");
        assert_eq!(
            err.to_string(),
            "Random: Validation failed: Min cannot be greater than Max [item 0]"
        );
    }

    #[test]
    fn node_name_prefers_configured_override() {
        let settings = RandomOrgSettings {
            node_name: Some("Dice".to_string()),
            ..RandomOrgSettings::default()
        };
        let app = build_app(MockHttpClient::new(), settings);
        assert_eq!(app.node_name(NodeKind::Range), "Dice");

        let app = build_app(MockHttpClient::new(), RandomOrgSettings::default());
        assert_eq!(app.node_name(NodeKind::Range), "Random.org");
        assert_eq!(app.settings().timeout.as_secs(), 30);
    }
}
