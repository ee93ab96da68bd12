// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FieldName, FieldValues, SignUpConfig};
use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "signup")]
#[command(about = "📝 Fill in the sign-up form, validate it, and submit it")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nEach value is typed into its field, in form order, just like a user would.\nUSAGE 📓:\n  signup [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(long, default_value = "", help = "Value for the name field")]
    pub name: String,

    #[arg(long, default_value = "", help = "Value for the email field")]
    pub email: String,

    #[arg(long, default_value = "", help = "Value for the password field")]
    pub password: String,

    #[arg(
        long,
        default_value = "",
        help = "Value for the password confirmation field"
    )]
    pub password_confirmation: String,

    #[arg(
        long,
        value_name = "URL",
        help = "Absolute URL that receives the POST. Defaults to the sign-up service"
    )]
    pub endpoint: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `signup_log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'd',
        help = "Validate and render the form, but don't send anything"
    )]
    pub dry_run: bool,
}

impl CLIArg {
    #[must_use]
    pub fn field_values(&self) -> FieldValues {
        let mut it = FieldValues::default();
        it.set(FieldName::Name, self.name.as_str());
        it.set(FieldName::Email, self.email.as_str());
        it.set(FieldName::Password, self.password.as_str());
        it.set(FieldName::PasswordConfirmation, self.password_confirmation.as_str());
        it
    }

    #[must_use]
    pub fn sign_up_config(&self) -> SignUpConfig {
        match &self.endpoint {
            Some(endpoint) => SignUpConfig::default().with_endpoint(endpoint.as_str()),
            None => SignUpConfig::default(),
        }
    }
}
