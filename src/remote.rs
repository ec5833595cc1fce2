use std::path::Path;

use serde::{Deserialize, Serialize};

/// Where the patched workflow should be pushed.
///
/// This tool never talks to the server itself; it only renders the command
/// an operator runs by hand, with a placeholder where their API key goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the n8n instance
    pub base_url: String,
    /// Identifier of the workflow to update
    pub workflow_id: String,
    /// Header that carries the API key
    pub api_key_header: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://n8n-reeceai-u56804.vm.elestio.app".to_string(),
            workflow_id: "TpApXEx47k8SEzln".to_string(),
            api_key_header: "X-N8N-API-KEY".to_string(),
        }
    }
}

/// Placeholder the operator substitutes with their real API key.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_KEY";

impl RemoteConfig {
    pub fn workflow_url(&self) -> String {
        format!(
            "{}/api/v1/workflows/{}",
            self.base_url.trim_end_matches('/'),
            self.workflow_id
        )
    }

    /// Render the curl command that PUTs `output` to the workflow endpoint.
    pub fn push_command(&self, output: &Path) -> String {
        format!(
            "curl -X PUT \"{url}\" \\\n  -H \"{header}: {key}\" \\\n  -H \"Content-Type: application/json\" \\\n  --data @{file}",
            url = self.workflow_url(),
            header = self.api_key_header,
            key = API_KEY_PLACEHOLDER,
            file = output.display(),
        )
    }
}
