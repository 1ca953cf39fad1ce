//! Inline span splitting.
//!
//! Text is split in a fixed order of passes. Each pass only looks at plain
//! spans; spans typed by an earlier pass are passed through untouched, so
//! delimiters inside code, links and images are never reinterpreted.

use log::trace;

use crate::extract::{extract_images, extract_links};
use crate::span::{TextKind, TextSpan};
use crate::{BlockdownError, Result};

/// Scanner returning `(text, url)` matches, see [`crate::extract`]
pub type Extractor = for<'a> fn(&'a str) -> Vec<(&'a str, &'a str)>;

/// Split plain spans on a paired `delimiter`, typing the enclosed text as `kind`.
///
/// Fails if any plain span holds an odd number of delimiters, or if `kind`
/// carries a url. Empty runs
/// (between two adjacent delimiters, or before/after them) produce no span.
pub fn split_by_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    spans
        .into_iter()
        .try_fold(Vec::new(), |mut out, span| {
            if !span.is_plain() {
                out.push(span);
                return Ok(out);
            }

            if span.text.matches(delimiter).count() % 2 != 0 {
                return Err(BlockdownError::UnbalancedDelimiter {
                    delimiter: delimiter.to_string(),
                    text: span.text,
                });
            }

            let mut rest = span.text.as_str();
            while let Some((before, after)) = rest.split_once(delimiter) {
                let (inner, remainder) = after.split_once(delimiter).unwrap_or((after, ""));
                push_plain(before, &mut out);
                if !inner.is_empty() {
                    out.push(TextSpan::styled(inner, kind)?);
                }
                rest = remainder;
            }
            push_plain(rest, &mut out);

            Ok(out)
        })
}

/// Split plain spans on the matches of `extractor`, typing them as `kind`.
///
/// `kind` selects the literal syntax searched for: `![text](url)` for images,
/// `[text](url)` otherwise. Empty plain spans are dropped.
pub fn split_by_pattern(
    spans: Vec<TextSpan>,
    extractor: Extractor,
    kind: TextKind,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        for (text, url) in extractor(&span.text) {
            let literal = literal_syntax(kind, text, url);
            // Not locatable in what is left: skip the match
            let Some((before, after)) = rest.split_once(literal.as_str()) else {
                continue;
            };
            push_plain(before, &mut out);
            out.push(TextSpan {
                text: text.to_string(),
                kind,
                url: Some(url.to_string()),
            });
            rest = after;
        }
        push_plain(rest, &mut out);
    }

    out
}

/// Split a run of inline text into typed spans.
///
/// Bold runs before italic so `**` is not read as two `*`, and images run
/// before links so `![x](y)` is consumed before the link scanner sees `[x](y)`.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_by_delimiter(spans, "**", TextKind::Bold)?;
    let spans = split_by_delimiter(spans, "*", TextKind::Italic)?;
    let spans = split_by_delimiter(spans, "`", TextKind::Code)?;
    let spans = split_by_pattern(spans, extract_images, TextKind::Image);
    let spans = split_by_pattern(spans, extract_links, TextKind::Link);

    trace!("split {} bytes of inline text into {} spans", text.len(), spans.len());
    Ok(spans)
}

fn literal_syntax(kind: TextKind, text: &str, url: &str) -> String {
    match kind {
        TextKind::Image => format!("![{text}]({url})"),
        _ => format!("[{text}]({url})"),
    }
}

fn push_plain(text: &str, out: &mut Vec<TextSpan>) {
    if !text.is_empty() {
        out.push(TextSpan::plain(text));
    }
}
