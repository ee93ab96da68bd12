// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configures how a [`miette::Report`] is printed when `main() -> miette::Result<_>`
//! returns an error. The hook is lazy, it only runs when a report is actually displayed.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Install the graphical report handler with `footer` appended to every report.
///
/// Calling this more than once is harmless; only the first call installs the hook.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        debug!("miette::set_hook -> building report handler");
        Box::new(
            MietteHandlerOpts::new()
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
