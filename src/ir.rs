//! Canonical command set and trajectory state shared by the parser and the
//! simulation engine.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A real-valued triple used for linear/angular velocity components.
///
/// Matches the wire shape of ROS-style twist messages (`{x, y, z}` objects).
/// Missing components in a structured payload decode as `0.0` rather than
/// poisoning the whole command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A single timed robot-control command.
///
/// Serialized with an externally visible `type` tag (`VELOCITY` / `WAIT`) so
/// structured payloads produced by other tools round-trip unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Sets the commanded linear speed (x component) and angular speed
    /// (z component).
    ///
    /// Without a `duration` the command is *instantaneous*: it changes the
    /// active velocity but consumes zero simulated time. The new velocity
    /// persists until overridden or until a later timed command consumes
    /// simulated time.
    #[serde(rename = "VELOCITY")]
    Velocity {
        linear: Vector3,
        angular: Vector3,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
    },

    /// Holds the currently active velocity unchanged for `duration` seconds
    /// of simulated time.
    #[serde(rename = "WAIT")]
    Wait { duration: f64 },
}

impl Command {
    /// A duration-less velocity command: forward speed `v`, yaw rate `w`.
    pub fn velocity(v: f64, w: f64) -> Self {
        Self::Velocity {
            linear: Vector3::new(v, 0.0, 0.0),
            angular: Vector3::new(0.0, 0.0, w),
            duration: None,
        }
    }

    /// A wait command holding the active velocity for `seconds`.
    pub fn wait(seconds: f64) -> Self {
        Self::Wait { duration: seconds }
    }

    /// Simulated time this command consumes; absent duration counts as zero.
    pub fn duration_secs(&self) -> f64 {
        match self {
            Self::Velocity { duration, .. } => duration.unwrap_or(0.0),
            Self::Wait { duration } => *duration,
        }
    }
}

impl fmt::Display for Command {
    /// One-line summary in the dashboard format: `VELOCITY v=1, w=0.5` or
    /// `WAIT t=2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Velocity {
                linear, angular, ..
            } => write!(f, "VELOCITY v={}, w={}", linear.x, angular.z),
            Self::Wait { duration } => write!(f, "WAIT t={duration}"),
        }
    }
}

/// An ordered command sequence plus its total nominal duration.
///
/// Produced by the parser from one input string; immutable once produced.
/// A new `Plan` fully replaces any prior one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Commands in execution order. Order is significant.
    pub commands: Vec<Command>,

    /// Sum of command durations, treating absent duration as 0.
    pub total_duration: f64,
}

impl Plan {
    /// Builds a plan from `commands`, computing the total duration.
    pub fn new(commands: Vec<Command>) -> Self {
        let total_duration = commands.iter().map(Command::duration_secs).sum();
        Self {
            commands,
            total_duration,
        }
    }

    /// The plan produced for unusable input: no commands, zero duration.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Robot pose and active velocity at a single query time.
///
/// Pose lives in a planar ground frame; `theta` is in radians and is not
/// normalized into any particular range. Produced fresh by each simulation
/// query, never mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotState {
    pub x: f64,
    pub y: f64,

    /// Orientation in radians, unbounded.
    pub theta: f64,

    /// Forward velocity (v) active at `time`.
    pub linear_velocity: f64,

    /// Yaw rate (omega) active at `time`.
    pub angular_velocity: f64,

    /// The query time this state answers for.
    pub time: f64,
}

impl RobotState {
    /// The canonical initial state at `t = 0`, independent of plan contents.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Planar position as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Unit vector the robot is facing along.
    pub fn heading(&self) -> DVec2 {
        DVec2::from_angle(self.theta)
    }
}
