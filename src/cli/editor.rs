//! Getting env text from the user: a file, stdin or an interactive editor.

use std::{
    env, fs,
    io::{self, Read, Write},
    path::Path,
    process::Command,
};

use tracing::debug;

use crate::cli::{CommandError, CommandResult};

const FALLBACK_EDITOR: &str = "vi";

/// `$VISUAL`, then `$EDITOR`, then `vi`.
pub fn default_editor() -> String {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Reads text from `path`, or from stdin when `path` is `-`.
pub fn read_text(path: &Path) -> CommandResult<String> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)?
    };
    Ok(strip_final_newline(&text).to_string())
}

/// Opens `editor` on a temporary file holding `initial` and returns what the
/// user saved. `editor` may carry arguments, e.g. `code --wait`.
pub fn edit_text(editor: &str, initial: &str) -> CommandResult<String> {
    let mut file = tempfile::Builder::new()
        .prefix("daas-env-")
        .suffix(".env")
        .tempfile()?;
    writeln!(file, "{initial}")?;
    file.flush()?;

    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| CommandError::Editor("no editor configured".to_string()))?;
    debug!(editor, path = %file.path().display(), "launching editor");
    let status = Command::new(program)
        .args(words)
        .arg(file.path())
        .status()
        .map_err(|e| CommandError::Editor(format!("{program}: {e}")))?;
    if !status.success() {
        return Err(CommandError::Editor(format!("{program} exited with {status}")));
    }

    read_text(file.path())
}

/// Files conventionally end with a newline; the editor text does not.
fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
