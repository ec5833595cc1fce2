use super::Workflow;

/// Replacement body for the `Parse Node Code` Code node. Takes the raw AI
/// output, strips markdown fences, parses it as JSON and validates the
/// action list before handing it to the next node.
pub const PARSE_NODE_SCRIPT: &str = r#"let outputString = $input.item.json.aiOutput;

// Remove markdown code blocks if present
outputString = outputString.replace(/```json\n?/g, '').replace(/```\n?/g, '').trim();

// Try to parse JSON
let actions;
try {
  actions = JSON.parse(outputString);
} catch (error) {
  console.error('Failed to parse AI output as JSON:', error);
  console.error('Raw output:', outputString);
  throw new Error(`AI returned invalid JSON: ${error.message}`);
}

// Validate it's an array
if (!Array.isArray(actions)) {
  throw new Error('AI response must be an array of actions');
}

// Validate each action has required fields
actions.forEach((action, index) => {
  if (!action.title || !action.description) {
    throw new Error(`Action at index ${index} missing required fields (title, description)`);
  }
});

return {
  json: {
    actions: actions,
    assessment_run_id: $input.item.json.assessmentRunId,
    project_id: $input.item.json.projectId,
    user_id: $input.item.json.userId,
    action_count: actions.length
  }
};"#;

/// Result of a patch attempt.
///
/// `NotFound` is deliberately not an error: the original migration flow
/// writes the output file either way and the caller decides what to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched {
        node_name: String,
        old_len: usize,
        new_len: usize,
    },
    NotFound,
}

/// Replace the `jsCode` of the first node named `target` with `replacement`.
///
/// First match wins: later nodes with the same name are left untouched. A
/// matching node without a `jsCode` field gains one (reported with an old
/// length of zero). All other fields of every node pass through unchanged.
pub fn apply_patch(workflow: &mut Workflow, target: &str, replacement: &str) -> PatchOutcome {
    for node in &mut workflow.nodes {
        if node.name == target {
            let old_len = node.parameters.js_code.as_deref().map_or(0, str::len);
            node.parameters.js_code = Some(replacement.to_string());
            return PatchOutcome::Patched {
                node_name: node.name.clone(),
                old_len,
                new_len: replacement.len(),
            };
        }
    }
    PatchOutcome::NotFound
}
