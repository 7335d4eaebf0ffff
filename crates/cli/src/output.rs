use std::{env, path::Path};

use eyre::{eyre, Result};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is an absolute directory, return `/{output}/{filename}`
/// - otherwise `output` is relative to the current working directory, return
///   `{cwd}/{output}/{filename}`
pub(crate) fn build_output_path(output: &str, filename: &str) -> Result<String> {
    let output = output.trim_end_matches('/');

    if Path::new(output).is_absolute() {
        return Ok(format!("{}/{}", output, filename));
    }

    let cwd = env::current_dir()?
        .into_os_string()
        .into_string()
        .map_err(|_| eyre!("Unable to get current working directory"))?;

    Ok(format!("{}/{}/{}", cwd, output, filename))
}
