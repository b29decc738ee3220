use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    Project,
    Group,
    Experiment,
    Job,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    User,
    Project,
    Tensorboard,
    Notebook,
    Group,
    Experiment,
    Job,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Experiment,
    Job,
}

#[derive(Debug, Deserialize)]
pub struct UrlifyProjectNameInput {
    pub project_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SplitNameInput {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GetUniqueNameInput {
    pub kind: NameKind,
    pub username: String,
    pub project_name: String,
    #[serde(default)]
    pub sequence: Option<u64>,
    #[serde(default)]
    pub job_sequence: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct GetUrlInput {
    pub kind: UrlKind,
    pub username: String,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub sequence: Option<u64>,
    #[serde(default)]
    pub job_sequence: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct GetIndexNameInput {
    pub kind: IndexKind,
    pub unique_name: String,
}

#[derive(Debug, Deserialize)]
pub struct GetCssClassInput {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PluralizeInput {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct SortByUpdatedAtInput {
    pub records: Vec<Value>,
}

/// Cookies either as a map or as a raw `Cookie` header. The map wins if both are sent.
#[derive(Debug, Default, Deserialize)]
pub struct SessionInput {
    #[serde(default)]
    pub cookies: Option<HashMap<String, String>>,
    #[serde(default)]
    pub cookie_header: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionOutput {
    pub token: Option<crate::auth::TokenState>,
    pub authenticated: bool,
    pub home_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthUrlsInput {
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Serialize)]
pub struct AuthUrlsOutput {
    pub login_url: String,
    pub logout_url: String,
}

#[derive(Debug, Serialize)]
pub struct HandleAuthErrorOutput {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub dispatched: Vec<crate::auth::Action>,
}

#[derive(Debug, Deserialize)]
pub struct HumanizeTimeDeltaInput {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FormatLongDateInput {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct B64DecodeInput {
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DelayInput {
    #[serde(default)]
    pub ms: Option<u64>,
}
