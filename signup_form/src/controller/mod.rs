// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod dispatcher;
pub mod mock_client;
pub mod page;
pub mod sign_up_client;

// Re-export.
pub use dispatcher::*;
pub use mock_client::*;
pub use page::*;
pub use sign_up_client::*;
