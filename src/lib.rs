// n8n-patcher library - workflow export patching
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod remote;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use config::{PatcherConfig, DEFAULT_TARGET_NODE};
pub use remote::{RemoteConfig, API_KEY_PLACEHOLDER};
pub use telemetry::init_tracing;
pub use workflow::{apply_patch, Node, Parameters, PatchOutcome, Workflow, WorkflowError,
    WorkflowStore, PARSE_NODE_SCRIPT};
