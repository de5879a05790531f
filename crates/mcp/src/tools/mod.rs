pub mod bounties;
mod registry;

pub use bounties::{ClaimBountyTool, GetBountyTool, GetStatsTool, ListBountiesTool, SubmitWorkTool};
pub use registry::{json_schema_object, json_schema_string, Tool, ToolRegistry};
