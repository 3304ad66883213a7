// Feasibility prefill prompt templates.
// The system prompt is sent verbatim on every call; the output schema it
// describes is what `AiResult::schema_problem` checks against.

use crate::feasibility::models::ProjectAttributes;

/// Rendered in place of any optional attribute the caller did not supply.
pub const NOT_PROVIDED: &str = "unknown (not provided)";

pub const PREFILL_SYSTEM: &str = r#"
You are a property development feasibility assistant for NSW, Australia.
You help pre-fill assumptions for a feasibility model.

Constraints:
- You CANNOT live-browse the web. Use only your training and general knowledge.
- You may suggest likely official sources/URLs (e.g. NSW Planning Portal, council websites),
  but you must clearly state that the user must verify them.

Focus areas:
- Section 7.11 and 7.12 development contributions (explain which is likely to apply).
- Housing and Productivity Contribution (HPC) where relevant.
- Long Service Levy.
- BASIX fees (rough magnitude and where to check).
- Typical construction cost per m² for this type of product.
- Typical marketing % of gross realisation.
- Other common state/local contributions (SIC, state infrastructure charges, bonds, etc.)

Output:
Return ONLY valid JSON in this structure:

{
  "assumptions": {
    "section_711_per_dwelling": {
      "value": <number or null>,
      "unit": "AUD per dwelling",
      "notes": "string",
      "source_links": ["https://...", "..."]
    },
    "section_712_percent": {
      "value": <number or null>,
      "unit": "% of estimated development cost",
      "notes": "string",
      "source_links": ["https://..."]
    },
    "hpc_per_dwelling": {
      "value": <number or null>,
      "unit": "AUD per dwelling",
      "notes": "string",
      "source_links": ["https://..."]
    },
    "construction_cost_per_m2": {
      "value": <number or null>,
      "unit": "AUD per m2",
      "notes": "string",
      "source_links": ["https://..."]
    },
    "marketing_percent_of_gross": {
      "value": <number or null>,
      "unit": "% of gross realisation",
      "notes": "string",
      "source_links": ["https://..."]
    },
    "long_service_levy_percent": {
      "value": <number or null>,
      "unit": "% of construction cost",
      "notes": "string",
      "source_links": ["https://..."]
    },
    "basix_fee_estimate": {
      "value": <number or null>,
      "unit": "AUD per project or dwelling",
      "notes": "string",
      "source_links": ["https://..."]
    },
    "other_state_charges_estimate": {
      "value": <number or null>,
      "unit": "AUD total",
      "notes": "string",
      "source_links": ["https://..."]
    }
  },
  "computed": {
    "estimated_total_construction_cost": <number or null>,
    "estimated_total_contributions": <number or null>,
    "notes": "string"
  }
}
"#;

/// Builds the per-request instruction. Absent optional attributes are rendered
/// as `NOT_PROVIDED` rather than dropped.
pub fn build_user_prompt(project: &ProjectAttributes) -> String {
    let number = |n: Option<f64>| n.map_or_else(|| NOT_PROVIDED.to_string(), |n| n.to_string());

    format!(
        r#"Project details:
- Address: {address}
- LGA: {lga}
- Project type: {project_type}
- Number of dwellings: {dwellings}
- Gross floor area (m2): {gfa_m2}
- Brief description: {description}

Task:
Based on NSW practice, estimate:
- Section 7.11 OR 7.12 contributions relevant to this project (and explain which is more likely).
- HPC per dwelling if applicable, or note if unlikely.
- Long Service Levy %.
- Typical construction cost per m² for this product type in NSW.
- Typical marketing % of gross realisation.
- Rough BASIX fee magnitude.
- Any other common state or local charges.

Then compute:
- estimated_total_construction_cost = construction_cost_per_m2 * gfa_m2 (if both known)
- estimated_total_contributions = contributions + HPC + other charges (approx).

Return data in the exact JSON format described in the system prompt.
If you are unsure, set value to null and explain in notes."#,
        address = project.address,
        lga = project.lga,
        project_type = project.project_type,
        dwellings = number(project.dwellings),
        gfa_m2 = number(project.gfa_m2),
        description = project.description.as_deref().unwrap_or(NOT_PROVIDED),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility::models::ASSUMPTION_KEYS;

    fn project() -> ProjectAttributes {
        ProjectAttributes {
            address: "1 Main St".to_string(),
            lga: "Sydney".to_string(),
            project_type: "residential".to_string(),
            dwellings: None,
            gfa_m2: None,
            description: None,
        }
    }

    #[test]
    fn test_prompt_embeds_required_fields() {
        let prompt = build_user_prompt(&project());
        assert!(prompt.contains("- Address: 1 Main St"));
        assert!(prompt.contains("- LGA: Sydney"));
        assert!(prompt.contains("- Project type: residential"));
    }

    #[test]
    fn test_absent_optionals_render_placeholder() {
        let prompt = build_user_prompt(&project());
        assert!(prompt.contains("- Number of dwellings: unknown (not provided)"));
        assert!(prompt.contains("- Gross floor area (m2): unknown (not provided)"));
        assert!(prompt.contains("- Brief description: unknown (not provided)"));
    }

    #[test]
    fn test_present_optionals_are_rendered() {
        let mut p = project();
        p.dwellings = Some(12.0);
        p.gfa_m2 = Some(1450.5);
        p.description = Some("Six-storey shop-top housing".to_string());

        let prompt = build_user_prompt(&p);
        assert!(prompt.contains("- Number of dwellings: 12\n"));
        assert!(prompt.contains("- Gross floor area (m2): 1450.5\n"));
        assert!(prompt.contains("- Brief description: Six-storey shop-top housing\n"));
        assert!(!prompt.contains(NOT_PROVIDED));
    }

    #[test]
    fn test_caller_text_is_not_treated_as_placeholder() {
        let mut p = project();
        p.address = "{lga} Lane".to_string();

        let prompt = build_user_prompt(&p);
        assert!(prompt.contains("- Address: {lga} Lane"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_user_prompt(&project()), build_user_prompt(&project()));
    }

    #[test]
    fn test_system_prompt_names_every_assumption() {
        for key in ASSUMPTION_KEYS {
            assert!(PREFILL_SYSTEM.contains(key), "missing {key}");
        }
        assert!(PREFILL_SYSTEM.contains("CANNOT live-browse"));
        assert!(PREFILL_SYSTEM.contains("\"computed\""));
    }

    #[test]
    fn test_system_prompt_keeps_surrounding_newlines() {
        assert!(PREFILL_SYSTEM.starts_with("\nYou are a property development"));
        assert!(PREFILL_SYSTEM.ends_with("  }\n}\n"));
    }
}
