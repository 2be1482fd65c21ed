//! Range generator use case - batches of integers or decimals via JSON-RPC.

use std::sync::Arc;

use randorg_domain::{
    Count, DecimalPlaces, ErrorRecord, GenerationRequest, ItemOutput, NodeItem, Operation,
    RangeResult,
};

use super::error::{GenerationError, NodeOperationError};
use crate::description::params;
use crate::infrastructure::ports::{
    ClockPort, ErrorReporter, HttpClient, ParameterSource, ParameterSourceExt,
};
use crate::infrastructure::random_org::{JsonRpcRequest, JsonRpcResponse};

/// Generates `count` integers or decimals per item from the Random.org
/// JSON-RPC API.
///
/// Items are processed one at a time. With continue-on-fail set, a failing
/// item is emitted as an error record; otherwise the first failure aborts
/// the run.
pub struct RangeGenerator {
    http: Arc<dyn HttpClient>,
    clock: Arc<dyn ClockPort>,
    endpoint: String,
    api_key: Option<String>,
}

impl RangeGenerator {
    pub fn new(
        http: Arc<dyn HttpClient>,
        clock: Arc<dyn ClockPort>,
        endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            clock,
            endpoint: endpoint.into(),
            api_key,
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
            match self.generate_item(params, item_index).await {
                Ok(result) => items.push(ItemOutput::Range(result).into()),
                Err(e) if reporter.continue_on_fail() => {
                    tracing::warn!(item_index, error = %e, "Item failed, continuing");
                    items.push(ItemOutput::Error(ErrorRecord::new(e.to_string())).into());
                }
                Err(e) => {
                    tracing::error!(item_index, error = %e, "Item failed, aborting run");
                    return Err(NodeOperationError::new(reporter.node_name(), item_index, e));
                }
            }
        }

        Ok(items)
    }

    async fn generate_item(
        &self,
        params: &dyn ParameterSource,
        item_index: usize,
    ) -> Result<RangeResult, GenerationError> {
        let request = read_request(params, item_index)?;

        let id = self.clock.now().timestamp_millis();
        let call = JsonRpcRequest::for_generation(&request, self.api_key.as_deref(), id)
            .ok_or_else(|| GenerationError::UnsupportedOperation(request.operation().to_string()))?;
        tracing::debug!(item_index, method = call.method(), id, "Calling Random.org");

        let body = serde_json::to_value(&call)
            .map_err(|e| GenerationError::BadUpstreamResponse(e.to_string()))?;
        let raw = self.http.post_json(&self.endpoint, body).await?;

        let response: JsonRpcResponse = serde_json::from_value(raw)
            .map_err(|e| GenerationError::BadUpstreamResponse(e.to_string()))?;

        let result = match response {
            JsonRpcResponse::Failure { error } => {
                return Err(GenerationError::Api {
                    code: error.code,
                    message: error.message,
                });
            }
            JsonRpcResponse::Success { result } => result,
        };

        if let Some(delay_ms) = result.advisory_delay {
            tracing::debug!(
                item_index,
                delay_ms,
                requests_left = ?result.requests_left,
                bits_left = ?result.bits_left,
                "Random.org advisory delay"
            );
        }

        let data = result.random.data;
        if data.len() != request.count() as usize {
            tracing::warn!(
                item_index,
                expected = request.count(),
                received = data.len(),
                "Random.org returned an unexpected number of values"
            );
        }

        let values = request.transform(data);
        RangeResult::from_request(&request, values, self.clock.now())
            .ok_or_else(|| GenerationError::UnsupportedOperation(request.operation().to_string()))
    }
}

/// Resolve and validate one item's parameters, before any network call.
fn read_request(
    source: &dyn ParameterSource,
    item_index: usize,
) -> Result<GenerationRequest, GenerationError> {
    let operation = source.string_parameter(params::OPERATION, item_index)?;
    let operation = match operation.parse::<Operation>() {
        Ok(op @ (Operation::Integer | Operation::Decimal)) => op,
        _ => return Err(GenerationError::UnsupportedOperation(operation)),
    };

    let min = source.number_parameter(params::MIN, item_index)?;
    let max = source.number_parameter(params::MAX, item_index)?;
    let count = Count::new(source.number_parameter(params::COUNT, item_index)?)?;

    let request = match operation {
        Operation::Decimal => {
            let places = source.number_parameter(params::DECIMAL_PLACES, item_index)?;
            GenerationRequest::decimals(min, max, count, DecimalPlaces::new(places)?)?
        }
        _ => GenerationRequest::integers(min, max, count)?,
    };
    Ok(request)
}
