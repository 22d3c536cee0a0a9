//! Tolerant parser that extracts a command [`Plan`] from heterogeneous input:
//! mock-ROS call scripts, key=value pairs, XML-attribute-like markup, or JSON
//! payloads.
//!
//! The entry point is [`parse`]. It never fails: malformed input degrades to
//! the best-effort plan that could be extracted, possibly empty.

use crate::ir::{Command, Plan};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Wait/sleep/delay with a non-negative duration, reached through arbitrary
/// separators: `wait(2.0)`, `sleep 2`, `<wait duration="2" />`, `delay: 1.5`.
static WAIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:wait|sleep|delay)(?:_command)?.*?(?:duration|time|seconds|s|val)?\s*[=:(]?\s*["']?(\d+\.?\d*)["']?"#,
    )
    .expect("wait pattern compiles")
});

/// Call-style velocity: `cmd_vel(1.0, 0.5)` or `velocity(1.0, 0.5)`.
static VELOCITY_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:cmd_vel|velocity)\s*\(\s*(-?\d+\.?\d*)\s*,\s*(-?\d+\.?\d*)")
        .expect("velocity call pattern compiles")
});

/// Broad heuristic grabbing two decimals near a movement keyword, covering
/// XML attributes and key=value notations.
static VELOCITY_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:cmd_vel|velocity|move|drive)(?:_command)?.*?(?:linear|x|v|val)?\s*[=:]?\s*["']?(-?\d+\.?\d*)["']?.*?(?:angular|z|w|rot)?\s*[=:]?\s*["']?(-?\d+\.?\d*)["']?"#,
    )
    .expect("loose velocity pattern compiles")
});

/// Line matchers in priority order. The first one returning a command wins;
/// the order decides which heuristic claims an ambiguous line, so wait checks
/// run before any velocity check.
const LINE_MATCHERS: [fn(&str) -> Option<Command>; 3] =
    [match_wait, match_velocity_call, match_velocity_loose];

/// Extracts a [`Plan`] from raw input text.
///
/// Input starting with `[`, or with `{` while mentioning a `"commands"` key,
/// is decoded as a structured JSON payload; everything else is treated as a
/// line-oriented script. Both paths recover from malformed content instead of
/// failing; the worst case is an empty plan.
pub fn parse(input: &str) -> Plan {
    let trimmed = input.trim();
    if trimmed.starts_with('[') || (trimmed.starts_with('{') && trimmed.contains("\"commands\"")) {
        parse_structured(trimmed)
    } else {
        parse_script(trimmed)
    }
}

/// Decodes a JSON payload, branching explicitly on its shape:
/// a command array, a mapping holding a `commands` array, or a bare mapping
/// taken as one command.
fn parse_structured(input: &str) -> Plan {
    let value: Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "structured payload rejected, returning empty plan");
            return Plan::empty();
        }
    };

    match decode_commands(value) {
        Ok(commands) => Plan::new(commands),
        Err(err) => {
            tracing::warn!(%err, "structured payload held no usable commands");
            Plan::empty()
        }
    }
}

fn decode_commands(value: Value) -> Result<Vec<Command>, serde_json::Error> {
    match value {
        Value::Array(_) => serde_json::from_value(value),
        Value::Object(mut map) => match map.remove("commands") {
            Some(list @ Value::Array(_)) => serde_json::from_value(list),
            // A `commands` key of some other shape stays part of the mapping.
            Some(other) => {
                map.insert("commands".to_owned(), other);
                serde_json::from_value(Value::Object(map)).map(|cmd| vec![cmd])
            }
            None => serde_json::from_value(Value::Object(map)).map(|cmd| vec![cmd]),
        },
        other => serde_json::from_value(other),
    }
}

/// Walks the script line by line, trying each matcher in priority order.
/// Blank lines, comment lines, and lines no matcher recognizes contribute
/// nothing.
fn parse_script(input: &str) -> Plan {
    let mut commands = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with('#')
            || line.starts_with("//")
            || line.starts_with("<!--")
        {
            continue;
        }

        match LINE_MATCHERS.iter().find_map(|matcher| matcher(line)) {
            Some(cmd) => commands.push(cmd),
            None => tracing::trace!(line, "no matcher recognized line"),
        }
    }

    Plan::new(commands)
}

fn match_wait(line: &str) -> Option<Command> {
    let caps = WAIT.captures(line)?;
    let duration = caps[1].parse().ok()?;
    Some(Command::wait(duration))
}

fn match_velocity_call(line: &str) -> Option<Command> {
    let caps = VELOCITY_CALL.captures(line)?;
    let v = caps[1].parse().ok()?;
    let w = caps[2].parse().ok()?;
    Some(Command::velocity(v, w))
}

fn match_velocity_loose(line: &str) -> Option<Command> {
    // Guard against generic numeric text: the loose pattern only applies when
    // the line itself talks about movement.
    if !(line.contains("vel") || line.contains("move") || line.contains("drive")) {
        return None;
    }
    let caps = VELOCITY_LOOSE.captures(line)?;
    let v = caps[1].parse().ok()?;
    let w = caps[2].parse().ok()?;
    Some(Command::velocity(v, w))
}
