//! Integration tests for the MCP server binary over stdio
//!
//! Spawns `sdd-mcp serve`, writes newline-delimited JSON-RPC requests, closes
//! stdin and checks the responses written to stdout.

use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_session(project_root: &Path, requests: &[Value]) -> Vec<Value> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sdd-mcp"))
        .arg("serve")
        .arg("--project-root")
        .arg(project_root)
        .arg("--commands-dir")
        .arg(Path::new(env!("CARGO_MANIFEST_DIR")).join("commands"))
        .env_remove("SDD_MCP_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    {
        let mut stdin = child.stdin.take().unwrap();
        for request in requests {
            writeln!(stdin, "{}", request).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn tool_call(id: u64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

#[test]
fn test_handshake_and_tool_list() {
    let temp_dir = TempDir::new().unwrap();
    let responses = run_session(
        temp_dir.path(),
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        ],
    );

    // The notification gets no response
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "sdd-mcp");

    let names: Vec<&str> = responses[1]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["plan", "create-spec", "create-tasks", "implement", "sync-docs", "context-docs"]
    );
}

#[test]
fn test_plan_on_new_project() {
    let temp_dir = TempDir::new().unwrap();
    let responses = run_session(
        temp_dir.path(),
        &[tool_call(1, "plan", json!({"project_name": "Acme"}))],
    );

    let result = &responses[0]["result"];
    assert!(result.get("isError").is_none());
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("# PLAN Command Workflow"));
    assert!(text.contains("- **State**: NEW"));
    assert!(text.contains("\"project_name\": \"Acme\""));
    assert!(text.contains("## File Templates"));
}

#[test]
fn test_gated_commands_report_errors() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join(".github")).unwrap();

    let responses = run_session(
        temp_dir.path(),
        &[
            tool_call(
                1,
                "create-spec",
                json!({"feature_name": "Login", "problem_statement": "No sign in"}),
            ),
            tool_call(2, "implement", json!({"task_id": "next"})),
        ],
    );

    for response in &responses {
        assert_eq!(response["result"]["isError"], true);
    }
    let spec_text = responses[0]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(spec_text.contains("Current state: Partially configured"));
    let implement_text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(
        implement_text,
        "Error: No active spec found. Please run /create-spec first."
    );
}

#[test]
fn test_full_flow_with_active_spec() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join(".github")).unwrap();
    std::fs::write(root.join(".github/product.md"), "# Acme").unwrap();
    std::fs::create_dir_all(root.join("specs/SPEC-20240101-login")).unwrap();
    std::fs::write(
        root.join(".github/context.md"),
        "ACTIVE_SPEC: SPEC-20240101-login\nLAST_UPDATED: 2024-01-01\nPROJECT_STATE: developing\n",
    )
    .unwrap();

    let responses = run_session(
        root,
        &[
            tool_call(1, "create-tasks", json!({"implementation_approach": "risk-first"})),
            tool_call(2, "implement", json!({"approach": "careful"})),
            tool_call(3, "sync-docs", json!({"scope": "current-spec"})),
        ],
    );

    let texts: Vec<&str> = responses
        .iter()
        .map(|r| r["result"]["content"][0]["text"].as_str().unwrap())
        .collect();
    assert!(texts[0].contains("- **Active Spec**: SPEC-20240101-login"));
    assert!(texts[1].contains("- **State**: DEVELOPING"));
    assert!(texts[2].contains("- **State**: DOCUMENTED"));
}
