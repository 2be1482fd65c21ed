//! Single-value generator use case - one integer per item from the legacy
//! plain-text endpoint.

use std::sync::Arc;

use randorg_domain::{IntegerRange, ItemOutput, NodeItem, Operation, SingleValueResult};

use super::error::{GenerationError, NodeOperationError};
use crate::description::params;
use crate::infrastructure::ports::{
    ClockPort, ErrorReporter, HttpClient, ParameterSource, ParameterSourceExt, TEXT_PLAIN,
};
use crate::infrastructure::random_org::{integers_url, parse_integer_body};

/// Fetches one true-random integer per item.
///
/// There is no continue-on-fail path: the first failing item aborts the run.
pub struct SingleValueGenerator {
    http: Arc<dyn HttpClient>,
    clock: Arc<dyn ClockPort>,
    base_url: String,
}

impl SingleValueGenerator {
    pub fn new(
        http: Arc<dyn HttpClient>,
        clock: Arc<dyn ClockPort>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            clock,
            base_url: base_url.into(),
        }
    }

    /// Run the node over every input item.
    pub async fn execute(
        &self,
        params: &dyn ParameterSource,
        reporter: &dyn ErrorReporter,
    ) -> Result<Vec<NodeItem>, NodeOperationError> {
        let item_count = params.item_count();
        let mut items = Vec::with_capacity(item_count);

        for item_index in 0..item_count {
            let result = self
                .generate_item(params, item_index)
                .await
                .map_err(|e| {
                    tracing::error!(item_index, error = %e, "Item failed, aborting run");
                    NodeOperationError::new(reporter.node_name(), item_index, e)
                })?;
            items.push(ItemOutput::SingleValue(result).into());
        }

        Ok(items)
    }

    async fn generate_item(
        &self,
        source: &dyn ParameterSource,
        item_index: usize,
    ) -> Result<SingleValueResult, GenerationError> {
        let operation = source.string_parameter(params::OPERATION, item_index)?;
        if operation != Operation::Trng.as_str() {
            return Err(GenerationError::UnsupportedOperation(operation));
        }

        let min = source.number_parameter(params::MIN, item_index)?;
        let max = source.number_parameter(params::MAX, item_index)?;
        let range = IntegerRange::new(min, max)?;

        let url = integers_url(&self.base_url, range).map_err(|e| {
            GenerationError::InvalidEndpoint {
                url: self.base_url.clone(),
                message: e.to_string(),
            }
        })?;
        tracing::debug!(item_index, url = %url, "Calling Random.org");

        let body = self.http.get_text(&url, TEXT_PLAIN).await?;
        let value = parse_integer_body(&body).ok_or_else(|| {
            GenerationError::BadUpstreamResponse(format!(
                "expected an integer, got {:?}",
                body.trim()
            ))
        })?;

        if !range.contains(value) {
            tracing::warn!(
                item_index,
                value,
                min = range.min(),
                max = range.max(),
                "Random.org returned a value outside the requested range"
            );
        }

        Ok(SingleValueResult::new(value, range, url, self.clock.now()))
    }
}
