// src/lib.rs

//! Internal library for the `scaffold` binary – not published on crates.io

pub mod app_controller;
pub mod common;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{ScaffoldConfig, ScaffoldConfigBuilder},
    copy::copy_tree,
    error::ScaffoldError,
    install::{InstallCommand, Installer},
    model::{CopiedEntry, CopySummary, EntryKind, ScaffoldReport},
    scaffold::{Milestone, Scaffolder},
};
