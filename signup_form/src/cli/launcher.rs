// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, Document, FieldName, FieldValues, FormState, HeadlessDocument,
            ReqwestSignUpClient, SignUpClient, SignUpError, SignUpPage, TracingConfig,
            cli_msg, try_initialize_logging_global};
use std::fmt::Write as _;
use tracing::{debug, info};

/// How far [`fill_and_submit`] got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The form was valid, but nothing was sent.
    DryRun,
    /// The form had errors, so the submit control was disabled and nothing was sent.
    Invalid,
    /// The POST succeeded.
    Submitted,
}

/// Type each value into its field in form order, then submit if the form allows it.
///
/// # Errors
///
/// Propagates [`SignUpPage::handle_input`] and [`SignUpPage::submit`] errors. A failed
/// POST leaves the page in the `failed` state before the error is returned.
pub async fn fill_and_submit<D: Document, C: SignUpClient>(
    page: &mut SignUpPage<D, C>,
    values: &FieldValues,
    dry_run: bool,
) -> Result<RunOutcome, SignUpError> {
    for (field, value) in values.iter() {
        page.handle_input(field, value)?;
    }

    if !page.state().valid {
        info!(message = "form is invalid", errors = page.state().errors.len());
        return Ok(RunOutcome::Invalid);
    }

    if dry_run {
        return Ok(RunOutcome::DryRun);
    }

    page.submit().await?;
    Ok(RunOutcome::Submitted)
}

/// Human readable summary of the page, printed by the `signup` binary.
#[must_use]
pub fn render_report(state: &FormState, outcome: Option<RunOutcome>, html: &str) -> String {
    let mut acc = String::new();

    if state.errors.is_empty() {
        _ = writeln!(acc, "{}", cli_msg::form_is_valid());
    } else {
        for field in FieldName::all() {
            if let Some(violation) = state.errors.get(&field) {
                _ = writeln!(acc, "{}", cli_msg::field_error(field, &violation.message));
            }
        }
    }

    match outcome {
        Some(RunOutcome::Invalid) => {
            _ = writeln!(acc, "{}", cli_msg::not_submitting_invalid_form());
        }
        Some(RunOutcome::DryRun) => {
            _ = writeln!(acc, "{}", cli_msg::dry_run());
        }
        Some(RunOutcome::Submitted) | None => {}
    }

    _ = writeln!(acc, "{}", cli_msg::process_state(state.process_state));
    if let Some(process_error) = &state.process_error {
        _ = writeln!(acc, "{}", cli_msg::process_error(process_error));
    }
    _ = writeln!(acc, "{}", cli_msg::document_heading());
    _ = writeln!(acc, "{html}");

    acc
}

/// Entry point of the `signup` binary.
///
/// # Errors
///
/// Returns an error if:
/// - Logging was requested and can't be set up
/// - The HTTP client can't be created
/// - The submission fails (the report is printed first)
pub async fn run_app(cli_arg: CLIArg) -> miette::Result<()> {
    if cli_arg.global_options.enable_logging {
        try_initialize_logging_global(TracingConfig::new_file(None))?;
        // % is Display, ? is Debug.
        debug!(
            message = "Start logging...",
            endpoint = ?cli_arg.endpoint,
            dry_run = %cli_arg.global_options.dry_run
        );
    }

    let config = cli_arg.sign_up_config();
    let client = ReqwestSignUpClient::try_new(&config)?;
    let mut page = SignUpPage::try_new(HeadlessDocument::sign_up_page(), client, config)?;

    let values = cli_arg.field_values();
    let will_submit = !cli_arg.global_options.dry_run;
    if will_submit {
        println!("{}", cli_msg::submitting(&page.config().endpoint));
    }

    let result = fill_and_submit(&mut page, &values, cli_arg.global_options.dry_run).await;

    print!(
        "{}",
        render_report(
            page.state(),
            result.as_ref().ok().copied(),
            &page.document().to_html()
        )
    );

    if cli_arg.global_options.enable_logging {
        debug!(message = "Stop logging...");
    }

    result?;
    Ok(())
}
