//! Use-Cases der Application-Layer-Orchestrierung.

pub mod connection_tool;
pub mod editing;
pub mod file_io;
pub mod gesture;
pub mod selection;
pub mod transform;
pub mod viewport;
