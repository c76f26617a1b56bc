//! One module per menu-selectable unit of behavior. Every handler reads
//! from the telemetry collector, the package adapter, or its own prompts,
//! renders to the console, and returns control to the session loop.

pub mod custom;
pub mod packages;
pub mod processes;
pub mod system;
pub mod users;
