use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::auth::{
    get_home_url, get_login_url, get_logout_url, get_token, handle_auth_error,
    is_user_authenticated, Action, CookieJar, ResponseStatus,
};
use crate::config::DashboardConfig;
use crate::datetime::{delay, format_long_date, humanize_time_delta_str, parse_timestamp};
use crate::encoding::b64_decode_unicode;
use crate::error::{DashboardError, Result};
use crate::naming::{
    get_experiment_index_name, get_experiment_unique_name, get_experiment_url,
    get_group_unique_name, get_group_url, get_job_index_name, get_job_unique_name, get_job_url,
    get_notebook_url, get_project_unique_name, get_project_url, get_tensorboard_url,
    get_user_url, split_project_name, urlify_project_name,
};
use crate::status::{get_css_class_for_status, pluralize, sort_by_updated_at};

use super::dto::{
    AuthUrlsInput, AuthUrlsOutput, B64DecodeInput, DelayInput, FormatLongDateInput,
    GetCssClassInput, GetIndexNameInput, GetUniqueNameInput, GetUrlInput, HandleAuthErrorOutput,
    HumanizeTimeDeltaInput, IndexKind, NameKind, PluralizeInput, SessionInput, SessionOutput,
    SortByUpdatedAtInput, SplitNameInput, Tool, ToolCall, ToolResult, UrlKind,
    UrlifyProjectNameInput,
};

fn tool(name: &str, description: &str, input_schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

pub fn tool_catalog() -> Vec<Tool> {
    let sequence = json!({ "type": "integer", "minimum": 0 });
    let cookies = json!({
        "cookies": { "type": "object", "additionalProperties": { "type": "string" } },
        "cookie_header": { "type": "string" }
    });

    vec![
        tool(
            "urlify_project_name",
            "Turn a dotted project name into a path (user.project -> user/project)",
            json!({
                "type": "object",
                "properties": { "project_name": { "type": "string" } },
                "required": ["project_name"]
            }),
        ),
        tool(
            "split_name",
            "Split a dotted project or group name into its parts",
            json!({
                "type": "object",
                "properties": { "name": { "type": "string" } },
                "required": ["name"]
            }),
        ),
        tool(
            "get_unique_name",
            "Build the dotted unique name of a project, group, experiment or job",
            json!({
                "type": "object",
                "properties": {
                    "kind": { "enum": ["project", "group", "experiment", "job"] },
                    "username": { "type": "string" },
                    "project_name": { "type": "string" },
                    "sequence": sequence,
                    "job_sequence": sequence
                },
                "required": ["kind", "username", "project_name"]
            }),
        ),
        tool(
            "get_url",
            "Build a dashboard path for a user, project, tool page, group, experiment or job",
            json!({
                "type": "object",
                "properties": {
                    "kind": {
                        "enum": ["user", "project", "tensorboard", "notebook", "group", "experiment", "job"]
                    },
                    "username": { "type": "string" },
                    "project_name": { "type": "string" },
                    "sequence": sequence,
                    "job_sequence": sequence
                },
                "required": ["kind", "username"]
            }),
        ),
        tool(
            "get_index_name",
            "Strip group (and task type, for jobs) segments from a unique name",
            json!({
                "type": "object",
                "properties": {
                    "kind": { "enum": ["experiment", "job"] },
                    "unique_name": { "type": "string" }
                },
                "required": ["kind", "unique_name"]
            }),
        ),
        tool(
            "get_css_class_for_status",
            "Map a run status to its badge style",
            json!({
                "type": "object",
                "properties": { "status": { "type": "string" } }
            }),
        ),
        tool(
            "pluralize",
            "Append 's' unless count is exactly one",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "count": { "type": "integer" }
                },
                "required": ["name", "count"]
            }),
        ),
        tool(
            "sort_by_updated_at",
            "Order records by updated_at, newest first",
            json!({
                "type": "object",
                "properties": { "records": { "type": "array", "items": { "type": "object" } } },
                "required": ["records"]
            }),
        ),
        tool(
            "get_session",
            "Read the token state, authentication flag and home URL from session cookies",
            json!({ "type": "object", "properties": cookies }),
        ),
        tool(
            "get_auth_urls",
            "Login and logout paths; external=true makes the login link absolute",
            json!({
                "type": "object",
                "properties": { "external": { "type": "boolean" } }
            }),
        ),
        tool(
            "handle_auth_error",
            "Check a response status; failures request a current-user refetch",
            json!({
                "type": "object",
                "properties": {
                    "ok": { "type": "boolean" },
                    "status_text": { "type": "string" }
                },
                "required": ["ok"]
            }),
        ),
        tool(
            "humanize_time_delta",
            "Short elapsed-time label between two timestamps",
            json!({
                "type": "object",
                "properties": {
                    "start": { "type": "string" },
                    "end": { "type": "string" }
                }
            }),
        ),
        tool(
            "format_long_date",
            "Format a timestamp as 'Weekday, Month D, YYYY'",
            json!({
                "type": "object",
                "properties": { "date": { "type": "string" } },
                "required": ["date"]
            }),
        ),
        tool(
            "b64_decode_unicode",
            "Decode base64-encoded UTF-8 text",
            json!({
                "type": "object",
                "properties": { "value": { "type": "string" } },
                "required": ["value"]
            }),
        ),
        tool(
            "delay",
            "Wait for the given number of milliseconds",
            json!({
                "type": "object",
                "properties": { "ms": { "type": "integer", "minimum": 0 } }
            }),
        ),
    ]
}

pub async fn handle_tool_call(config: &DashboardConfig, tool_call: ToolCall) -> Result<ToolResult> {
    tracing::info!("Handling tool call: {}", tool_call.name);
    let arguments = tool_call.arguments;

    let result = match tool_call.name.as_str() {
        "urlify_project_name" => {
            let input: UrlifyProjectNameInput = parse_arguments(arguments)?;
            json!(urlify_project_name(&input.project_name))
        }
        "split_name" => {
            let input: SplitNameInput = parse_arguments(arguments)?;
            json!(split_project_name(&input.name))
        }
        "get_unique_name" => {
            let input: GetUniqueNameInput = parse_arguments(arguments)?;
            json!(unique_name(&input)?)
        }
        "get_url" => {
            let input: GetUrlInput = parse_arguments(arguments)?;
            json!(url(&input)?)
        }
        "get_index_name" => {
            let input: GetIndexNameInput = parse_arguments(arguments)?;
            match input.kind {
                IndexKind::Experiment => json!(get_experiment_index_name(&input.unique_name)),
                IndexKind::Job => json!(get_job_index_name(&input.unique_name)),
            }
        }
        "get_css_class_for_status" => {
            let input: GetCssClassInput = parse_arguments(arguments)?;
            json!(get_css_class_for_status(input.status.as_deref()))
        }
        "pluralize" => {
            let input: PluralizeInput = parse_arguments(arguments)?;
            json!(pluralize(&input.name, input.count))
        }
        "sort_by_updated_at" => {
            let mut input: SortByUpdatedAtInput = parse_arguments(arguments)?;
            input.records.sort_by(sort_by_updated_at);
            json!(input.records)
        }
        "get_session" => {
            let input: SessionInput = parse_arguments(arguments)?;
            let jar = match (input.cookies, input.cookie_header) {
                (Some(cookies), header) => {
                    if header.is_some() {
                        tracing::debug!("Both cookies and cookie_header sent, using cookies");
                    }
                    CookieJar::from(cookies)
                }
                (None, Some(header)) => {
                    tracing::debug!("Reading session from cookie header");
                    CookieJar::parse(&header)
                }
                (None, None) => {
                    tracing::debug!("No cookies sent, session is empty");
                    CookieJar::default()
                }
            };
            serde_json::to_value(SessionOutput {
                token: get_token(&jar),
                authenticated: is_user_authenticated(&jar),
                home_url: get_home_url(&jar),
            })?
        }
        "get_auth_urls" => {
            let input: AuthUrlsInput = parse_arguments(arguments)?;
            serde_json::to_value(AuthUrlsOutput {
                login_url: get_login_url(&config.api.base_url, input.external),
                logout_url: get_logout_url(),
            })?
        }
        "handle_auth_error" => {
            let input: ResponseStatus = parse_arguments(arguments)?;
            serde_json::to_value(check_response(input))?
        }
        "humanize_time_delta" => {
            let input: HumanizeTimeDeltaInput = parse_arguments(arguments)?;
            json!(humanize_time_delta_str(
                input.start.as_deref(),
                input.end.as_deref()
            )?)
        }
        "format_long_date" => {
            let input: FormatLongDateInput = parse_arguments(arguments)?;
            json!(format_long_date(parse_timestamp(&input.date)?))
        }
        "b64_decode_unicode" => {
            let input: B64DecodeInput = parse_arguments(arguments)?;
            json!(b64_decode_unicode(&input.value)?)
        }
        "delay" => {
            let input: DelayInput = parse_arguments(arguments)?;
            delay(input.ms).await;
            json!({ "waited_ms": input.ms.unwrap_or(0) })
        }
        _ => {
            return Err(DashboardError::invalid_arguments(format!(
                "Unknown tool: {}",
                tool_call.name
            )));
        }
    };

    Ok(ToolResult {
        content: serde_json::to_string_pretty(&result)?,
        is_error: false,
    })
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| DashboardError::invalid_arguments(e.to_string()))
}

fn require_sequence(value: Option<u64>, field: &str) -> Result<u64> {
    value.ok_or_else(|| DashboardError::invalid_arguments(format!("{} is required", field)))
}

fn unique_name(input: &GetUniqueNameInput) -> Result<String> {
    let (user, project) = (input.username.as_str(), input.project_name.as_str());
    Ok(match input.kind {
        NameKind::Project => get_project_unique_name(user, project),
        NameKind::Group => {
            get_group_unique_name(user, project, require_sequence(input.sequence, "sequence")?)
        }
        NameKind::Experiment => get_experiment_unique_name(
            user,
            project,
            require_sequence(input.sequence, "sequence")?,
        ),
        NameKind::Job => get_job_unique_name(
            user,
            project,
            require_sequence(input.sequence, "sequence")?,
            require_sequence(input.job_sequence, "job_sequence")?,
        ),
    })
}

fn url(input: &GetUrlInput) -> Result<String> {
    let user = input.username.as_str();
    let project = || {
        input
            .project_name
            .as_deref()
            .ok_or_else(|| DashboardError::invalid_arguments("project_name is required"))
    };

    Ok(match input.kind {
        UrlKind::User => get_user_url(user),
        UrlKind::Project => get_project_url(user, project()?),
        UrlKind::Tensorboard => get_tensorboard_url(user, project()?),
        UrlKind::Notebook => get_notebook_url(user, project()?),
        UrlKind::Group => get_group_url(
            user,
            project()?,
            require_sequence(input.sequence, "sequence")?,
        ),
        UrlKind::Experiment => get_experiment_url(
            user,
            project()?,
            require_sequence(input.sequence, "sequence")?,
        ),
        UrlKind::Job => get_job_url(
            user,
            project()?,
            require_sequence(input.sequence, "sequence")?,
            require_sequence(input.job_sequence, "job_sequence")?,
        ),
    })
}

fn check_response(status: ResponseStatus) -> HandleAuthErrorOutput {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Action>();
    let outcome = handle_auth_error(status, &tx);

    let mut dispatched = Vec::new();
    while let Ok(action) = rx.try_recv() {
        dispatched.push(action);
    }

    match outcome {
        Ok(_) => HandleAuthErrorOutput {
            ok: true,
            error: None,
            dispatched,
        },
        Err(e) => HandleAuthErrorOutput {
            ok: false,
            error: Some(e.to_string()),
            dispatched,
        },
    }
}
