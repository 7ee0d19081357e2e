use crate::fonts;
use crate::model::{FontWeight, MM_PER_PT, TextRun};

pub struct WrappedLine {
    pub text: String,
    pub width: f32,
}

/// Width of `text` in layout units at `font_size` points.
pub fn text_width(text: &str, weight: FontWeight, font_size: f32) -> f32 {
    fonts::text_width(text, weight, font_size)
}

/// Distance between consecutive baselines.
pub fn line_pitch(font_size: f32, line_height_factor: f32) -> f32 {
    font_size * line_height_factor * MM_PER_PT
}

pub(crate) fn text_run(
    text: impl Into<String>,
    x: f32,
    baseline: f32,
    weight: FontWeight,
    font_size: f32,
    color: [u8; 3],
) -> TextRun {
    let text = text.into();
    let width = text_width(&text, weight, font_size);
    TextRun {
        text,
        x,
        baseline,
        width,
        font_size,
        weight,
        color,
    }
}

/// Greedy word wrap into lines no wider than `max_width`.
///
/// Newlines in `text` always start a new line. A word that is wider than
/// `max_width` on its own is split between characters. Empty input yields no
/// lines.
pub fn wrap_text(
    text: &str,
    weight: FontWeight,
    font_size: f32,
    max_width: f32,
) -> Vec<WrappedLine> {
    let mut lines: Vec<WrappedLine> = Vec::new();
    if text.trim().is_empty() {
        return lines;
    }
    let space_w = text_width(" ", weight, font_size);

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_w: f32 = 0.0;

        for word in paragraph.split_whitespace() {
            let ww = text_width(word, weight, font_size);

            if ww > max_width {
                if !current.is_empty() {
                    lines.push(finish_line(&mut current, &mut current_w));
                }
                for ch in word.chars() {
                    let cw = text_width(ch.encode_utf8(&mut [0; 4]), weight, font_size);
                    if !current.is_empty() && current_w + cw > max_width {
                        lines.push(finish_line(&mut current, &mut current_w));
                    }
                    current.push(ch);
                    current_w += cw;
                }
                continue;
            }

            let proposed = if current.is_empty() {
                ww
            } else {
                current_w + space_w + ww
            };
            if !current.is_empty() && proposed > max_width {
                lines.push(finish_line(&mut current, &mut current_w));
                current.push_str(word);
                current_w = ww;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_w = proposed;
            }
        }

        // Blank paragraphs keep their line so explicit spacing survives.
        lines.push(finish_line(&mut current, &mut current_w));
    }

    while lines.last().is_some_and(|l| l.text.is_empty()) {
        lines.pop();
    }
    lines
}

fn finish_line(current: &mut String, current_w: &mut f32) -> WrappedLine {
    let line = WrappedLine {
        text: std::mem::take(current),
        width: *current_w,
    };
    *current_w = 0.0;
    line
}
