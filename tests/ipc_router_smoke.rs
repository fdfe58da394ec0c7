use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_schoolsited");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn schoolsited");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

#[test]
fn health_reports_version_and_no_workspace() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let resp = request(&mut stdin, &mut reader, "1", "health", json!({}));
    assert_eq!(resp["ok"], json!(true));
    assert_eq!(resp["result"]["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(resp["result"]["workspacePath"], json!(null));
}

#[test]
fn unknown_method_is_not_implemented() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let resp = request(&mut stdin, &mut reader, "1", "nope.nothing", json!({}));
    assert_eq!(resp["ok"], json!(false));
    assert_eq!(resp["error"]["code"], json!("not_implemented"));
}

#[test]
fn workspace_select_requires_a_path() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let resp = request(&mut stdin, &mut reader, "1", "workspace.select", json!({}));
    assert_eq!(resp["error"]["code"], json!("bad_params"));
}

#[test]
fn malformed_lines_get_a_parseable_bad_json_reply() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    // Valid JSON but not a request; the serde message quotes the input,
    // which must not break the reply envelope.
    for raw in [r#""hello""#, "{not json", "[1, 2, 3]"] {
        writeln!(stdin, "{}", raw).expect("write raw line");
        stdin.flush().expect("flush");

        let mut line = String::new();
        reader.read_line(&mut line).expect("read response line");
        let value: serde_json::Value =
            serde_json::from_str(line.trim()).expect("reply must be valid JSON");
        assert_eq!(value["ok"], json!(false));
        assert_eq!(value["error"]["code"], json!("bad_json"));
    }

    // The loop is still alive afterwards.
    let resp = request(&mut stdin, &mut reader, "after", "health", json!({}));
    assert_eq!(resp["ok"], json!(true));
}

#[test]
fn public_lists_are_seeded_at_startup() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let resp = request(&mut stdin, &mut reader, "1", "teachers.list", json!({}));
    assert_eq!(resp["result"]["teachers"].as_array().map(Vec::len), Some(2));

    let resp = request(&mut stdin, &mut reader, "2", "gallery.list", json!({}));
    assert_eq!(resp["result"]["items"].as_array().map(Vec::len), Some(2));

    let resp = request(&mut stdin, &mut reader, "3", "studentResults.list", json!({}));
    assert_eq!(resp["result"]["results"].as_array().map(Vec::len), Some(3));
}
