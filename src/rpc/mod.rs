pub mod dto;
pub mod handler;
mod tools;

pub use dto::{RpcError, RpcRequest, RpcResponse, Tool, ToolCall, ToolResult};
pub use handler::{handle_request, parse_error};
pub use tools::{handle_tool_call, tool_catalog};
