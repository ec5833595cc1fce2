/// Workflow document model
///
/// Mirrors the shape of an n8n workflow export closely enough to reach the
/// fields this tool edits, while passing every other field through untouched
/// via flattened maps. The `jsCode` payload is opaque text to us; it is never
/// parsed or validated as code.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod patch;
pub mod store;

pub use patch::{apply_patch, PatchOutcome, PARSE_NODE_SCRIPT};
pub use store::{WorkflowError, WorkflowStore};

/// Top-level workflow export. Only `nodes` is interpreted; connections,
/// settings, pinned data and anything else n8n puts at the top level ride
/// along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<Node>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single workflow node. `name` is the human-visible label n8n shows in
/// the editor and the key we match against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Node parameters. `jsCode` only exists on Code nodes; everything else a
/// node carries in its parameters is preserved as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(rename = "jsCode", default, skip_serializing_if = "Option::is_none")]
    pub js_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    /// The n8n node type (e.g. `n8n-nodes-base.code`), if the export has one.
    pub fn node_type(&self) -> Option<&str> {
        self.extra.get("type").and_then(Value::as_str)
    }
}
