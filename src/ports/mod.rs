//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the fetchers and an external
//! system (process execution, filesystem). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::FileSystem;
pub use shell::{NonUtf8Stdout, ShellExecutor, ShellOutput};
