// tests/structured_payloads.rs
use scrubsim::{Command, Plan, Vector3, parse};

#[test]
fn array_payload() {
    let plan = parse(
        r#"[
            {"type": "VELOCITY",
             "linear": {"x": 1.0, "y": 0.0, "z": 0.0},
             "angular": {"x": 0.0, "y": 0.0, "z": 0.5},
             "duration": 2.0},
            {"type": "WAIT", "duration": 1.0}
        ]"#,
    );

    assert_eq!(plan.len(), 2);
    assert_eq!(
        plan.commands[0],
        Command::Velocity {
            linear: Vector3::new(1.0, 0.0, 0.0),
            angular: Vector3::new(0.0, 0.0, 0.5),
            duration: Some(2.0),
        }
    );
    assert_eq!(plan.commands[1], Command::wait(1.0));
    // Structured velocities may carry a duration; it counts toward the total.
    assert_eq!(plan.total_duration, 3.0);
}

#[test]
fn mapping_with_commands_array() {
    let plan = parse(r#"{"commands": [{"type": "WAIT", "duration": 2.0}]}"#);
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.commands[0], Command::wait(2.0));
    assert_eq!(plan.total_duration, 2.0);
}

#[test]
fn mapping_without_commands_array_is_one_command() {
    // The `commands` key is present but not an array, so the mapping itself
    // decodes as a single command; the stray key is ignored.
    let plan = parse(r#"{"type": "WAIT", "duration": 3.0, "commands": null}"#);
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.commands[0], Command::wait(3.0));
}

#[test]
fn truncated_json_yields_empty_plan() {
    let plan = parse(r#"[{"type": "WAIT", "dur"#);
    assert_eq!(plan, Plan::empty());

    let plan = parse(r#"{"commands": [{]}"#);
    assert_eq!(plan, Plan::empty());
}

#[test]
fn unknown_command_type_yields_empty_plan() {
    // One bad element poisons the whole payload; there are never
    // half-decoded commands in the result.
    let plan = parse(r#"[{"type": "WAIT", "duration": 1.0}, {"type": "TELEPORT"}]"#);
    assert_eq!(plan, Plan::empty());
}

#[test]
fn partial_vectors_default_missing_components() {
    let plan = parse(r#"[{"type": "VELOCITY", "linear": {"x": 2.0}, "angular": {}}]"#);
    assert_eq!(plan.len(), 1);
    assert_eq!(
        plan.commands[0],
        Command::Velocity {
            linear: Vector3::new(2.0, 0.0, 0.0),
            angular: Vector3::default(),
            duration: None,
        }
    );
    assert_eq!(plan.total_duration, 0.0);
}

#[test]
fn plan_serializes_in_wire_format() {
    let plan = parse("cmd_vel(1.0, 0.0)\nwait(2.0)");
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["totalDuration"], 2.0);
    assert_eq!(value["commands"][0]["type"], "VELOCITY");
    assert_eq!(value["commands"][0]["linear"]["x"], 1.0);
    assert_eq!(value["commands"][1]["type"], "WAIT");
    assert_eq!(value["commands"][1]["duration"], 2.0);
    // Duration-less velocities omit the field entirely on the wire.
    assert!(value["commands"][0].get("duration").is_none());
}
