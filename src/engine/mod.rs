// src/engine/mod.rs
pub mod config;
pub mod config_file;
pub mod copy;
pub mod error;
pub mod install;
pub mod model;
pub mod scaffold;
pub mod template;
