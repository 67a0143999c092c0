use crate::error::{ReleaseError, Result};
use crate::ui;
use std::path::Path;
use std::process::Command;

/// Run `command` through the platform shell and return its combined output.
///
/// Stdout and stderr share one stream so the captured text keeps the order the
/// command wrote it in. On a non-zero exit the captured output is printed and
/// returned inside [`ReleaseError::Command`].
///
/// # Arguments
/// * `command` - Shell command line
/// * `cwd` - Working directory, or the current one when `None`
pub fn run(command: &str, cwd: Option<&Path>) -> Result<String> {
    let mut cmd = shell_command(command);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output()?;
    let text = String::from_utf8_lossy(&output.stdout).to_string();

    if !output.status.success() {
        ui::display_output(&text);
        return Err(ReleaseError::Command {
            command: command.to_string(),
            code: output.status.code(),
            output: text,
        });
    }

    Ok(text)
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(format!("exec 2>&1\n{}", command));
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(format!("({}) 2>&1", command));
    cmd
}
