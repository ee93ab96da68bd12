// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod field;
pub mod form_state;
pub mod process_state;
pub mod state_change;
pub mod validator;
pub mod watched_state;

// Re-export.
pub use field::*;
pub use form_state::*;
pub use process_state::*;
pub use state_change::*;
pub use validator::*;
pub use watched_state::*;
