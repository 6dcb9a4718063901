//! Small helpers shared by state and components.

pub mod task;
pub mod time;
