//! Result Parser: turns raw completion text into an `AiResult`.

use tracing::warn;

use crate::feasibility::models::AiResult;

pub const INVALID_JSON_ERROR: &str = "Model did not return valid JSON";

/// Strictly parses `raw` as JSON. Any JSON document is returned unchanged.
///
/// Text that is not JSON (prose, markdown code fences) becomes
/// `AiResult::Unparseable` with the original text preserved in `raw`.
pub fn parse_ai_result(raw: &str) -> AiResult {
    match serde_json::from_str(raw) {
        Ok(value) => AiResult::Parsed(value),
        Err(e) => {
            warn!(raw_len = raw.len(), "Model output is not valid JSON: {e}");
            AiResult::Unparseable {
                error: INVALID_JSON_ERROR.to_string(),
                raw: raw.to_string(),
            }
        }
    }
}
