use crate::config::DashboardConfig;
use crate::error::Result;
use crate::rpc::{self, Tool, ToolCall, ToolResult};

/// Serves the dashboard helpers as callable tools.
#[derive(Debug, Clone)]
pub struct DashboardServer {
    config: DashboardConfig,
}

impl DashboardServer {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn get_tools(&self) -> Vec<Tool> {
        rpc::tool_catalog()
    }

    pub async fn handle_tool_call(&self, tool_call: ToolCall) -> Result<ToolResult> {
        rpc::handle_tool_call(&self.config, tool_call).await
    }
}
