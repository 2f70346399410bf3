//! Rendering errors against their source with `ariadne`.

use std::io::{self, IsTerminal};

use ariadne::{sources, Color, Config, Label, Report, ReportKind};
use msd_ir::Span;

use crate::MsdError;

/// Render `error` as a source snippet.
///
/// `path` names the source in the snippet header (`<stdin>` for piped
/// input). Colors are only used when `color` is set.
pub fn render(error: &MsdError, source: &str, path: &str, color: bool) -> String {
    let mut out = Vec::new();
    if build(error, source, path, color)
        .write(sources([(path.to_owned(), source.to_owned())]), &mut out)
        .is_err()
    {
        return format!("{path}: {error}\n");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Print `error` to stderr, colored when stderr is a terminal.
pub fn emit(error: &MsdError, source: &str, path: &str) {
    let color = io::stderr().is_terminal();
    eprint!("{}", render(error, source, path, color));
}

type Snippet = (String, std::ops::Range<usize>);

fn build(error: &MsdError, source: &str, path: &str, color: bool) -> Report<'static, Snippet> {
    let span = error.span();
    let offset = span.map_or(0, |span| clamp(span, source).start);
    let mut report = Report::build(ReportKind::Error, path.to_owned(), offset)
        .with_config(Config::default().with_color(color))
        .with_message(format!("{}: {}", error.category(), error.message()));

    if let Some(span) = span {
        report = report.with_label(
            Label::new((path.to_owned(), clamp(span, source)))
                .with_message(label_text(error))
                .with_color(Color::Red),
        );
    }
    if let MsdError::Syntax(parse) = error {
        if let Some(open) = parse.related_span() {
            report = report.with_label(
                Label::new((path.to_owned(), clamp(open, source)))
                    .with_message("parenthesis opened here")
                    .with_color(Color::Blue),
            );
        }
    }
    report.finish()
}

fn label_text(error: &MsdError) -> &'static str {
    match error {
        MsdError::Syntax(_) => "here",
        MsdError::Evaluation(_) => "while evaluating this",
    }
}

/// Keep a span inside the source so the renderer has something to point at.
fn clamp(span: Span, source: &str) -> std::ops::Range<usize> {
    let range = span.to_range();
    let end = range.end.min(source.len());
    let start = range.start.min(end);
    start..end
}
