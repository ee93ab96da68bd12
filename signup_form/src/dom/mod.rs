// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod document;
pub mod elements;
pub mod error_renderer;
pub mod headless_document;

// Re-export.
pub use document::*;
pub use elements::*;
pub use error_renderer::*;
pub use headless_document::*;
