// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config;
pub mod error;
pub mod log;
pub mod miette_setup_global_report_handler;
pub mod ui_str;

// Re-export.
pub use config::*;
pub use error::*;
pub use log::*;
pub use miette_setup_global_report_handler::*;
pub use ui_str::*;
