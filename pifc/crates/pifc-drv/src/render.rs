//! Turning recorded scan errors into diagnostics.

use pifc_lex::{LexicalError, ScanError};
use pifc_util::diagnostic::{Diagnostic, DiagnosticBuilder, SourceSnippet};

/// Build a diagnostic for `error`, quoting its line from `source` when the
/// line exists.
pub fn diagnostic(error: &ScanError, source: Option<&str>) -> Diagnostic {
    let mut builder = DiagnosticBuilder::error(error.message())
        .code(error.error.code())
        .span(error.span);

    let line = source.and_then(|text| text.lines().nth(error.line().saturating_sub(1) as usize));
    if let Some(line) = line {
        // a literal spanning lines is underlined to the end of its first line
        let room = (line.chars().count() as u32).saturating_sub(error.offset());
        let span = error.span.with_width(error.span.width.min(room));
        builder = builder.snippet(SourceSnippet::for_span(line, span));
    }

    let builder = match &error.error {
        LexicalError::UnknownToken { text } if text.starts_with(['"', '\'']) => builder
            .note(format!("found `{}`", one_line(text)))
            .help("close the literal with a matching quote"),
        LexicalError::UnknownToken { text } => builder
            .note(format!("found `{}`", one_line(text)))
            .help("identifiers start with a letter and contain only letters and digits"),
        LexicalError::NonCanonicalNumber { text } => {
            builder.help(format!("write it as `{}`", canonical(text)))
        },
        LexicalError::SignedZero { .. } => builder.help("write `0` without a sign"),
    };
    builder.build()
}

/// Render every error, separated by blank lines.
pub fn render_all(errors: &[ScanError], source: Option<&str>, origin: &str) -> String {
    errors
        .iter()
        .map(|error| diagnostic(error, source).render(origin))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn one_line(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// `007` -> `7`, `-00` -> `-0`
fn canonical(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix(['+', '-']) {
        Some(digits) => (&text[..1], digits),
        None => ("", text),
    };
    let trimmed = digits.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };
    format!("{}{}", sign, digits)
}
