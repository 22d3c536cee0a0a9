//! Deterministic re-simulation of a command [`Plan`] under unicycle
//! kinematics.
//!
//! [`step`] is a pure function of `(plan, target_time)`: every query replays
//! the plan from the canonical initial state at `t = 0`, so scrubbing
//! backwards and forwards over the same plan always reproduces bit-identical
//! states regardless of call history.

use crate::ir::{Command, Plan, RobotState};
use glam::DVec2;

/// Reconstructs the robot state at `target_time` by replaying `plan` from
/// `t = 0`.
///
/// Commands are walked in order until the logical timeline reaches the
/// target. A `Velocity` command first overwrites the active velocity pair,
/// whether or not it carries a duration; instantaneous commands consume no
/// simulated time. Commands with a positive duration integrate the pose with
/// explicit Euler steps under the unicycle model:
///
/// ```text
/// x += v * cos(theta) * dt
/// y += v * sin(theta) * dt
/// theta += w * dt
/// ```
///
/// When `target_time` falls inside a command's window, integration is clamped
/// to `dt = target_time - elapsed`, but the logical timeline still advances
/// by the command's FULL nominal duration. Later commands therefore keep
/// their scheduled start times on longer-horizon queries.
///
/// A negative `target_time` is treated as 0. Querying past the plan's end
/// returns the state reached at the last command's completion. `theta` is
/// never wrapped and no field is clamped.
pub fn step(plan: &Plan, target_time: f64) -> RobotState {
    let target = target_time.max(0.0);

    let mut state = RobotState::initial();
    let mut position = DVec2::ZERO;
    let mut sim_time = 0.0;

    for cmd in &plan.commands {
        if sim_time >= target {
            break;
        }

        if let Command::Velocity {
            linear, angular, ..
        } = cmd
        {
            state.linear_velocity = linear.x;
            state.angular_velocity = angular.z;
        }

        let nominal = cmd.duration_secs();
        if nominal > 0.0 {
            let dt = (target - sim_time).min(nominal);
            position += DVec2::from_angle(state.theta) * (state.linear_velocity * dt);
            state.theta += state.angular_velocity * dt;
            // Advance by the full nominal duration even when dt was clamped,
            // so the next command never starts early on a later query.
            sim_time += nominal;
        }
    }

    state.x = position.x;
    state.y = position.y;
    state.time = target;
    state
}
