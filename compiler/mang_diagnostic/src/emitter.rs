//! Terminal rendering of diagnostics through ariadne.

use std::io;

use ariadne::{Config, Label as AriadneLabel, Report, ReportKind, Source};

use crate::Diagnostic;

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the caller reports a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Write `diagnostic` against `source` (named `file_name`) to `writer`.
pub fn emit<W: io::Write>(
    diagnostic: &Diagnostic,
    file_name: &str,
    source: &str,
    colors: bool,
    writer: W,
) -> io::Result<()> {
    let offset = diagnostic
        .primary_span()
        .map_or(0, |span| span.start as usize)
        .min(source.len());
    let mut report = Report::build(ReportKind::Error, file_name, offset)
        .with_config(Config::default().with_color(colors))
        .with_code(diagnostic.code.as_str())
        .with_message(&diagnostic.message);
    for label in &diagnostic.labels {
        let range = clamp(label.span.to_range(), source.len());
        report = report.with_label(AriadneLabel::new((file_name, range)).with_message(&label.message));
    }
    for note in &diagnostic.notes {
        report = report.with_note(note);
    }
    report
        .finish()
        .write((file_name, Source::from(source.to_string())), writer)
}

/// Render `diagnostic` to a string without colors.
pub fn render(diagnostic: &Diagnostic, file_name: &str, source: &str) -> String {
    let mut buffer = Vec::new();
    if emit(diagnostic, file_name, source, false, &mut buffer).is_err() {
        return diagnostic.to_string();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn clamp(range: std::ops::Range<usize>, len: usize) -> std::ops::Range<usize> {
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);
    start..end
}
