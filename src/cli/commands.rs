//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! Output goes to the writer passed in so commands can be exercised in tests.

use std::io::Write;

use nameof_core::{EnumRange, extract_identifier};

use super::{CliError, CliResult, ExitCode};

/// Print `<text> -> <name>` for every input, `(empty)` when nothing resolves.
pub fn extract(
    texts: &[String],
    keep_template_suffix: bool,
    strict: bool,
    out: &mut impl Write,
) -> CliResult<ExitCode> {
    let mut unresolved = 0usize;
    for text in texts {
        let name = extract_identifier(text, keep_template_suffix);
        tracing::debug!(text = %text, name, keep_template_suffix, "extracted identifier");
        if name.is_empty() {
            unresolved += 1;
            writeln!(out, "{text} -> (empty)")?;
        } else {
            writeln!(out, "{text} -> {name}")?;
        }
    }

    if strict && unresolved > 0 {
        return Err(CliError::failure(format!("{unresolved} of {} inputs did not resolve", texts.len())));
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the default enum range compiled into this build.
pub fn show_default_range(out: &mut impl Write) -> CliResult<ExitCode> {
    let range = EnumRange::DEFAULT;
    writeln!(out, "default enum range: {range} ({} values)", range.value_count())?;
    Ok(ExitCode::SUCCESS)
}

/// Validate a candidate per-type range and print it.
pub fn check_range(min: i32, max: i32, out: &mut impl Write) -> CliResult<ExitCode> {
    let range = EnumRange::try_new(min, max).map_err(|err| CliError::failure(format!("Error: {err}")))?;
    writeln!(out, "valid enum range: {range} ({} values)", range.value_count())?;
    Ok(ExitCode::SUCCESS)
}
