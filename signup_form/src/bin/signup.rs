// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use signup_form::{CLIArg, run_app, setup_default_miette_global_report_handler};

#[tokio::main]
async fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(
        "Run `signup --help` to see every option.",
    );

    let cli_arg = CLIArg::parse();
    run_app(cli_arg).await
}
