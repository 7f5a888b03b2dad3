use ratatui::prelude::*;

use crate::models::HttpMethod;
use crate::output::{OutputBlock, OutputPanel, Tone};

/// Turn the output panel into styled lines
pub fn output_lines(panel: &OutputPanel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in panel.blocks() {
        match block {
            OutputBlock::Heading(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::White).bold(),
                )));
                lines.push(Line::default());
            }
            OutputBlock::Paragraph(text) => {
                lines.extend(text.lines().map(|l| Line::from(l.to_string())));
            }
            OutputBlock::Notice { tone, text } => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(tone_color(*tone)),
                )));
            }
            OutputBlock::Preformatted(text) => {
                lines.push(Line::default());
                lines.extend(highlight_json(text));
            }
        }
    }

    lines
}

/// Simple JSON syntax highlighting for pretty-printed text
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_json_line).collect()
}

fn highlight_json_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let (token, style) = match c {
            '"' => {
                let end = string_end(rest);
                let is_key = rest[end..].trim_start().starts_with(':');
                let color = if is_key { Color::Cyan } else { Color::Green };
                (&rest[..end], Style::default().fg(color))
            }
            '{' | '}' | '[' | ']' => (&rest[..1], Style::default().fg(Color::Yellow)),
            '-' | '0'..='9' => {
                let end = rest
                    .find(|ch: char| !(ch.is_ascii_digit() || "-+.eE".contains(ch)))
                    .unwrap_or(rest.len());
                (&rest[..end], Style::default().fg(Color::Yellow))
            }
            _ => {
                let word = ["true", "false", "null"]
                    .into_iter()
                    .find(|w| rest.starts_with(w));
                match word {
                    Some(w) => (&rest[..w.len()], Style::default().fg(Color::Magenta)),
                    None => (&rest[..c.len_utf8()], Style::default()),
                }
            }
        };
        spans.push(Span::styled(token.to_string(), style));
        rest = &rest[token.len()..];
    }

    Line::from(spans)
}

/// Byte index just past the closing quote of the string starting `text`
fn string_end(text: &str) -> usize {
    let mut escaped = false;
    for (i, ch) in text.char_indices().skip(1) {
        match ch {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return i + 1,
            _ => escaped = false,
        }
    }
    text.len()
}

/// Notice color
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Error => Color::Red,
    }
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::GET => Color::Green,
        HttpMethod::POST => Color::Yellow,
        HttpMethod::PUT => Color::Blue,
        HttpMethod::DELETE => Color::Red,
    }
}
