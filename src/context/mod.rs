//! Process-level context

mod environment;

pub use environment::Environment;
