//! Bridge between the UI thread and the worker thread that hosts the timers.

pub mod commands;
pub mod runtime;
