use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Required keys of the prefill request body, in reporting order.
pub const REQUIRED_FIELDS: [&str; 3] = ["address", "lga", "project_type"];

/// The eight assumption names the model is asked to fill, in schema order.
pub const ASSUMPTION_KEYS: [&str; 8] = [
    "section_711_per_dwelling",
    "section_712_percent",
    "hpc_per_dwelling",
    "construction_cost_per_m2",
    "marketing_percent_of_gross",
    "long_service_levy_percent",
    "basix_fee_estimate",
    "other_state_charges_estimate",
];

// ────────────────────────────────────────────────────────────────────────────
// Request side
// ────────────────────────────────────────────────────────────────────────────

/// Project attributes for a single prefill request. Lives for one request only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectAttributes {
    pub address: String,
    pub lga: String,
    pub project_type: String,
    pub dwellings: Option<f64>,
    pub gfa_m2: Option<f64>,
    pub description: Option<String>,
}

impl ProjectAttributes {
    /// Validates the untyped request body and builds the typed record.
    ///
    /// Absent and falsy values (`null`, `""`, `false`, `0`, `[]`, `{}`) count as missing.
    /// Every missing required field is reported, not just the first one.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| fields.get(*key).map_or(true, is_falsy))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            address: text_field(fields, "address").unwrap_or_default(),
            lga: text_field(fields, "lga").unwrap_or_default(),
            project_type: text_field(fields, "project_type").unwrap_or_default(),
            dwellings: number_field(fields, "dwellings"),
            gfa_m2: number_field(fields, "gfa_m2"),
            description: text_field(fields, "description"),
        })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Accepts JSON numbers and numeric strings; anything else is treated as not provided.
fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    match fields.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Model output schema
// ────────────────────────────────────────────────────────────────────────────

/// One named assumption as the model is asked to return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssumptionField {
    pub value: Option<f64>,
    pub unit: String,
    pub notes: String,
    /// URL-like strings suggested by the model. Not validated.
    pub source_links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefillAssumptions {
    pub section_711_per_dwelling: AssumptionField,
    pub section_712_percent: AssumptionField,
    pub hpc_per_dwelling: AssumptionField,
    pub construction_cost_per_m2: AssumptionField,
    pub marketing_percent_of_gross: AssumptionField,
    pub long_service_levy_percent: AssumptionField,
    pub basix_fee_estimate: AssumptionField,
    pub other_state_charges_estimate: AssumptionField,
}

/// Totals derived by the model. Never recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedSummary {
    pub estimated_total_construction_cost: Option<f64>,
    pub estimated_total_contributions: Option<f64>,
    pub notes: String,
}

/// The full document requested in the system prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefillOutput {
    pub assumptions: PrefillAssumptions,
    pub computed: ComputedSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Response side
// ────────────────────────────────────────────────────────────────────────────

/// What the model produced: the parsed JSON as-is, or an error object carrying the raw text.
/// Callers discriminate on the presence of an `error` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AiResult {
    Parsed(Value),
    Unparseable { error: String, raw: String },
}

impl AiResult {
    /// Describes how a parsed result deviates from `PrefillOutput`, if it does.
    /// Used for diagnostics only; the result itself is never altered.
    pub fn schema_problem(&self) -> Option<String> {
        match self {
            AiResult::Parsed(value) => serde_json::from_value::<PrefillOutput>(value.clone())
                .err()
                .map(|e| e.to_string()),
            AiResult::Unparseable { .. } => None,
        }
    }
}

/// Response body of `POST /api/feasibility/prefill`.
/// `project` is the inbound body exactly as received.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub project: Value,
    pub ai_result: AiResult,
}
