use regex::Captures;

use super::{
    kinds::{Image, Link},
    types::TextSpan,
};

/// A bracket-paren match: label, destination and byte range in the scanned text.
struct Found<'a> {
    label: &'a str,
    destination: &'a str,
    start: usize,
    end: usize,
}

fn find_images(text: &str) -> Vec<Found<'_>> {
    Image::pattern()
        .captures_iter(text)
        .map(|caps| found(&caps, 1, 2))
        .collect()
}

fn find_links(text: &str) -> Vec<Found<'_>> {
    Link::pattern()
        .captures_iter(text)
        .filter(|caps| &caps[1] != Image::MARKER)
        .map(|caps| found(&caps, 2, 3))
        .collect()
}

fn found<'a>(caps: &Captures<'a>, label: usize, destination: usize) -> Found<'a> {
    let whole = caps.get_match();
    Found {
        label: caps.get(label).map_or("", |m| m.as_str()),
        destination: caps.get(destination).map_or("", |m| m.as_str()),
        start: whole.start(),
        end: whole.end(),
    }
}

/// Returns `(alt, src)` for every image in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|f| (f.label.to_string(), f.destination.to_string()))
        .collect()
}

/// Returns `(text, href)` for every link in `text`, left to right. Images are not links.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|f| (f.label.to_string(), f.destination.to_string()))
        .collect()
}

/// Extracts images from every `Plain` span.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, find_images, |alt, src| TextSpan::image(alt, src))
}

/// Extracts links from every `Plain` span.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, find_links, |text, href| TextSpan::link(text, href))
}

/// Text between matches is flushed as `Plain` (empty runs are skipped); each
/// match becomes a span built by `make`. Spans without matches are kept as-is.
fn split_spans_matching(
    spans: Vec<TextSpan>,
    find: for<'a> fn(&'a str) -> Vec<Found<'a>>,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = &span else {
            out.push(span);
            continue;
        };

        let matches = find(text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            if m.start > cursor {
                out.push(TextSpan::plain(&text[cursor..m.start]));
            }
            out.push(make(m.label, m.destination));
            cursor = m.end;
        }
        if cursor < text.len() {
            out.push(TextSpan::plain(&text[cursor..]));
        }
    }

    out
}
