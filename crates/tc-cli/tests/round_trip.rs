//! Runs `make-base` then `process-requests` through the built binary,
//! piping the documents in on stdin exactly as a real caller would.

use std::io::Write;
use std::process::{Command, Stdio};

fn run(subcommand: &str, stdin_doc: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tc-cli"))
        .arg(subcommand)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tc-cli");

    child.stdin.take().unwrap().write_all(stdin_doc.as_bytes()).unwrap();
    child.wait_with_output().expect("failed to wait on tc-cli")
}

#[test]
fn make_base_then_process_requests_answers_a_bus_query() {
    let dir = std::env::temp_dir().join(format!("tc-cli-round-trip-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let snapshot_path = dir.join("snapshot.bin");

    let make_base_doc = serde_json::json!({
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0, "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 55.01, "longitude": 37.0, "road_distances": {}},
            {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false},
        ],
        "render_settings": {
            "width": 600.0, "height": 400.0, "padding": 50.0,
            "line_width": 14.0, "stop_radius": 5.0,
            "bus_label_font_size": 20, "bus_label_offset": [7.0, 15.0],
            "stop_label_font_size": 20, "stop_label_offset": [7.0, -3.0],
            "underlayer_color": "white", "underlayer_width": 3.0,
            "color_palette": ["green"],
        },
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40.0},
        "serialization_settings": {"file": snapshot_path},
    })
    .to_string();

    let make_base_output = run("make-base", &make_base_doc);
    assert!(make_base_output.status.success(), "stderr: {}", String::from_utf8_lossy(&make_base_output.stderr));
    assert!(snapshot_path.exists());

    let process_requests_doc = serde_json::json!({
        "serialization_settings": {"file": snapshot_path},
        "stat_requests": [
            {"id": 1, "type": "Bus", "name": "1"},
        ],
    })
    .to_string();

    let process_requests_output = run("process-requests", &process_requests_doc);
    assert!(
        process_requests_output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&process_requests_output.stderr)
    );

    let stdout = String::from_utf8(process_requests_output.stdout).unwrap();
    let answers: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(answers[0]["request_id"], 1);
    assert_eq!(answers[0]["stop_count"], 3);

    std::fs::remove_dir_all(&dir).ok();
}
