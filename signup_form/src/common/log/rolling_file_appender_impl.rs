// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;

/// Split `path_str` into the folder and the file name that the appender writes to. A
/// bare file name, eg: `signup_log.txt`, lands in the current folder.
///
/// # Errors
///
/// Returns an error if the path has no file name, eg: `/` or `logs/..`.
pub fn try_split_log_path(path_str: &str) -> miette::Result<(PathBuf, PathBuf)> {
    let path = Path::new(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            help = "Pass a file path, eg: `signup_log.txt`",
            "Log file path {} does not name a file",
            path.display()
        )
    })?;

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((folder, PathBuf::from(file_name)))
}

/// Never rotates, all the logs of a run go to one file. The folder is created if it is
/// missing.
///
/// Wrapping the result in `tracing_appender::non_blocking` loses lines when the process
/// exits, so it is used as a plain blocking writer.
///
/// # Errors
///
/// Returns an error if the path has no file name, or the folder can't be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let (folder, file_name) = try_split_log_path(path_str)?;
    std::fs::create_dir_all(&folder).into_diagnostic()?;
    Ok(tracing_appender::rolling::never(folder, file_name))
}
