//! Prefill pipeline: prompt → completion → parse.
//!
//! Each call is independent. Provider failures are returned to the caller
//! untouched; only unparseable model output is recovered here.

use tracing::{info, warn};

use crate::feasibility::models::{AiResult, ProjectAttributes};
use crate::feasibility::parser::parse_ai_result;
use crate::feasibility::prompts::{build_user_prompt, PREFILL_SYSTEM};
use crate::llm_client::{CompletionProvider, LlmError};

pub async fn prefill(
    project: &ProjectAttributes,
    completion: &dyn CompletionProvider,
) -> Result<AiResult, LlmError> {
    let prompt = build_user_prompt(project);

    info!(
        lga = %project.lga,
        project_type = %project.project_type,
        "Requesting feasibility prefill"
    );
    let raw = completion.complete(PREFILL_SYSTEM, &prompt).await?;

    let result = parse_ai_result(&raw);
    if let Some(problem) = result.schema_problem() {
        warn!("Model output deviates from the prefill schema: {problem}");
    }

    Ok(result)
}
