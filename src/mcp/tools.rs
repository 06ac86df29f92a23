use crate::constant::log::*;
use crate::extractor::ExtractOptions;
use crate::jenkins::client::JenkinsFetch;
use crate::jenkins::query::{query_console_log, query_job_info};
use formatx::formatx;
use serde_json::{json, Value};

pub const TOOL_FETCH_CONSOLE_LOG: &str = "fetch_console_log";
pub const TOOL_GET_JOB_INFO: &str = "get_job_info";

pub fn tool_definitions() -> Value {
    json!([
        {
            "name": TOOL_FETCH_CONSOLE_LOG,
            "description": "Fetch console log from a Jenkins job build using pre-configured credentials.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "job_url": {
                        "type": "string",
                        "description": "Full Jenkins job URL or job path"
                    },
                    "build_number": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Specific build number (optional, defaults to latest)"
                    },
                    "parse_errors": {
                        "type": "boolean",
                        "default": true,
                        "description": "Extract only error-relevant sections (default: true)"
                    }
                },
                "required": ["job_url"]
            }
        },
        {
            "name": TOOL_GET_JOB_INFO,
            "description": "Get basic information about a Jenkins job using pre-configured credentials.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "job_url": {
                        "type": "string",
                        "description": "Full Jenkins job URL or job path"
                    }
                },
                "required": ["job_url"]
            }
        }
    ])
}

/// Text and error flag of a finished tool call.
#[derive(Debug, PartialEq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn err(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// # coerce build number
///
/// Tool callers send build numbers as integers, floats like `42.0` or strings like `"42"`.
/// Anything that is not a whole number >= 1 is rejected.
pub fn coerce_build_number(value: Option<&Value>) -> Result<Option<u32>, String> {
    let invalid = |v: &Value| formatx!(ERR_INVALID_BUILD_NUMBER, v.to_string()).unwrap_or_default();

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v @ Value::Number(n)) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= u32::MAX as f64)
                    .map(|f| f as u64)
            })
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n >= 1)
            .map(Some)
            .ok_or_else(|| invalid(v)),
        Some(v @ Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .map(Some)
            .ok_or_else(|| invalid(v)),
        Some(v) => Err(invalid(v)),
    }
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| formatx!(ERR_MISSING_ARGUMENT, key).unwrap_or_default())
}

pub async fn call_tool<C>(
    client: &C,
    options: &ExtractOptions,
    name: &str,
    args: &Value,
) -> ToolOutput
where
    C: JenkinsFetch + ?Sized,
{
    match name {
        TOOL_FETCH_CONSOLE_LOG => fetch_console_log_tool(client, options, args)
            .await
            .unwrap_or_else(|msg| {
                ToolOutput::err(formatx!(ERR_FETCH_CONSOLE_LOG, msg).unwrap_or_default())
            }),
        TOOL_GET_JOB_INFO => get_job_info_tool(client, args)
            .await
            .unwrap_or_else(|msg| {
                ToolOutput::err(formatx!(ERR_FETCH_JOB_INFO, msg).unwrap_or_default())
            }),
        _ => ToolOutput::err(formatx!(ERR_UNKNOWN_TOOL, name).unwrap_or_default()),
    }
}

async fn fetch_console_log_tool<C>(
    client: &C,
    options: &ExtractOptions,
    args: &Value,
) -> Result<ToolOutput, String>
where
    C: JenkinsFetch + ?Sized,
{
    let job_url = required_str(args, "job_url")?;
    let build_number = coerce_build_number(args.get("build_number"))?;
    let parse_errors = args
        .get("parse_errors")
        .and_then(|v| v.as_bool())
        .unwrap_or(true);

    let log = query_console_log(client, job_url, build_number, parse_errors, options)
        .await
        .map_err(|e| e.to_string())?;

    let log_type = if log.parsed {
        LOG_TYPE_PARSED
    } else {
        LOG_TYPE_FULL
    };

    Ok(ToolOutput::ok(
        formatx!(
            RESULT_CONSOLE_LOG,
            log_type,
            job_url,
            log.build_number,
            log.content
        )
        .unwrap_or_default(),
    ))
}

async fn get_job_info_tool<C>(client: &C, args: &Value) -> Result<ToolOutput, String>
where
    C: JenkinsFetch + ?Sized,
{
    let job_url = required_str(args, "job_url")?;

    let (_, info) = query_job_info(client, job_url)
        .await
        .map_err(|e| e.to_string())?;
    let formatted = serde_json::to_string_pretty(&info).map_err(|e| e.to_string())?;

    Ok(ToolOutput::ok(
        formatx!(RESULT_JOB_INFO, job_url, formatted).unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jenkins::fake_client::FakeJenkins;

    #[test]
    fn test_coerce_build_number() {
        assert_eq!(coerce_build_number(None), Ok(None));
        assert_eq!(coerce_build_number(Some(&Value::Null)), Ok(None));
        assert_eq!(coerce_build_number(Some(&json!(42))), Ok(Some(42)));
        assert_eq!(coerce_build_number(Some(&json!(42.0))), Ok(Some(42)));
        assert_eq!(coerce_build_number(Some(&json!(" 17 "))), Ok(Some(17)));

        assert!(coerce_build_number(Some(&json!(0))).is_err());
        assert!(coerce_build_number(Some(&json!(-3))).is_err());
        assert!(coerce_build_number(Some(&json!(4.5))).is_err());
        assert!(coerce_build_number(Some(&json!("latest"))).is_err());
        assert!(coerce_build_number(Some(&json!(true))).is_err());
        assert!(coerce_build_number(Some(&json!(u64::MAX))).is_err());
    }

    #[test]
    fn test_tool_definitions() {
        let tools = tool_definitions();
        let names: Vec<&str> = tools
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(names, vec![TOOL_FETCH_CONSOLE_LOG, TOOL_GET_JOB_INFO]);
    }

    #[tokio::test]
    async fn test_fetch_console_log_tool() {
        let client = FakeJenkins::new().with_ok("job/a/5/consoleText", "step\nERROR boom\ndone");

        let output = call_tool(
            &client,
            &ExtractOptions::default(),
            TOOL_FETCH_CONSOLE_LOG,
            &json!({ "job_url": "https://h/job/a/", "build_number": 5.0 }),
        )
        .await;

        assert!(!output.is_error);
        assert_eq!(
            output.text,
            "Console log (parsed error sections) for job https://h/job/a/ (build 5):\n\nstep\nERROR boom\ndone"
        );
    }

    #[tokio::test]
    async fn test_fetch_console_log_tool_full_log() {
        let client = FakeJenkins::new().with_ok("job/a/5/consoleText", "nothing {} to see");

        let output = call_tool(
            &client,
            &ExtractOptions::default(),
            TOOL_FETCH_CONSOLE_LOG,
            &json!({ "job_url": "job/a", "build_number": "5", "parse_errors": false }),
        )
        .await;

        assert!(!output.is_error);
        assert!(output.text.starts_with("Console log (full log) for job job/a (build 5):"));
        assert!(output.text.ends_with("nothing {} to see"));
    }

    #[tokio::test]
    async fn test_fetch_console_log_tool_errors() {
        let client = FakeJenkins::new();

        let output = call_tool(
            &client,
            &ExtractOptions::default(),
            TOOL_FETCH_CONSOLE_LOG,
            &json!({ "job_url": "https://h/job/a/", "build_number": 0 }),
        )
        .await;
        assert!(output.is_error);
        assert!(output.text.starts_with("Error fetching console log: build_number"));

        let output = call_tool(
            &client,
            &ExtractOptions::default(),
            TOOL_FETCH_CONSOLE_LOG,
            &json!({}),
        )
        .await;
        assert!(output.is_error);
        assert_eq!(
            output.text,
            "Error fetching console log: Missing required argument: job_url"
        );
    }

    #[tokio::test]
    async fn test_get_job_info_tool() {
        let client = FakeJenkins::new().with_ok("job/a/api/json", r#"{"name":"a"}"#);

        let output = call_tool(
            &client,
            &ExtractOptions::default(),
            TOOL_GET_JOB_INFO,
            &json!({ "job_url": "https://h/job/a" }),
        )
        .await;

        assert!(!output.is_error);
        assert_eq!(
            output.text,
            "Job information for https://h/job/a:\n\n{\n  \"name\": \"a\"\n}"
        );

        let output = call_tool(
            &client,
            &ExtractOptions::default(),
            TOOL_GET_JOB_INFO,
            &json!({ "job_url": "https://h/job/missing" }),
        )
        .await;
        assert!(output.is_error);
        assert!(output.text.starts_with("Error fetching job info: "));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let output = call_tool(
            &FakeJenkins::new(),
            &ExtractOptions::default(),
            "delete_job",
            &json!({}),
        )
        .await;
        assert_eq!(
            output,
            ToolOutput {
                text: "Unknown tool: delete_job".to_string(),
                is_error: true
            }
        );
    }
}
