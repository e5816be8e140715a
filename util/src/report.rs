use std::ops::Range;

use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};

type Span = Range<usize>;

fn describe(token: Option<&String>) -> &str {
    token.map_or("end of input", String::as_str)
}

fn label(span: Span, message: impl std::fmt::Display, color: Color) -> Label<Span> {
    Label::new(span)
        .with_message(message.fg(color))
        .with_color(color)
}

/// The headline and labels for one parser error.
fn describe_error(e: &Simple<String>) -> (String, Vec<Label<Span>>) {
    let found = describe(e.found());
    match e.reason() {
        SimpleReason::Unexpected => {
            // `expected` is a hash set; sort it so the message is stable.
            let mut expected = e
                .expected()
                .map(|t| describe(t.as_ref()))
                .collect::<Vec<_>>();
            expected.sort_unstable();
            expected.dedup();
            let message = match expected.as_slice() {
                [] => format!("Unexpected {found}"),
                [one] => format!("Unexpected {found}, expected {one}"),
                many => format!("Unexpected {found}, expected one of {}", many.join(", ")),
            };
            let labels = vec![label(e.span(), format!("unexpected {found}"), Color::Red)];
            (message, labels)
        }
        SimpleReason::Unclosed { span, delimiter } => (
            format!("Unclosed delimiter {delimiter}"),
            vec![
                label(span.clone(), format!("{delimiter} opened here"), Color::Yellow),
                label(e.span(), format!("must be closed before {found}"), Color::Red),
            ],
        ),
        SimpleReason::Custom(msg) => (msg.clone(), vec![label(e.span(), msg, Color::Red)]),
    }
}

/// Builds a diagnostic for a single parser error, labelling the offending span.
pub fn build_report(e: &Simple<String>) -> Report {
    let (message, labels) = describe_error(e);
    labels
        .into_iter()
        .fold(
            Report::build(ReportKind::Error, (), e.span().start).with_message(message),
            |report, label| report.with_label(label),
        )
        .finish()
}

/// Prints every error against `input` on stderr.
pub fn eprint_errors(input: &str, errors: &[Simple<String>]) -> std::io::Result<()> {
    for e in errors {
        build_report(e).eprint(Source::from(input))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use chumsky::Error;

    use super::*;

    fn render(e: &Simple<String>, input: &str) -> String {
        let mut out = Vec::new();
        build_report(e).write(Source::from(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_for_custom_error() {
        let e = Simple::custom(2..5, "identifier is too long");
        assert!(render(&e, "\\x.abcdef").contains("identifier is too long"));
    }

    #[test]
    fn test_expected_tokens_are_sorted() {
        let e = Simple::expected_input_found(
            3..4,
            [Some(")".to_string()), Some("(".to_string()), None],
            Some(".".to_string()),
        );
        let (message, labels) = describe_error(&e);
        assert_eq!(message, "Unexpected ., expected one of (, ), end of input");
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn test_unexpected_end_of_input() {
        let e = Simple::expected_input_found(2..3, [Some(".".to_string())], None);
        let (message, _) = describe_error(&e);
        assert_eq!(message, "Unexpected end of input, expected .");
    }
}
