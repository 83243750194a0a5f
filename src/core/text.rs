use crate::core::types::BarRow;

/// Sans-serif font size used for value labels, matching the scene defaults.
pub const VALUE_LABEL_FONT_SIZE_PX: f64 = 12.0;

const ELLIPSIS: char = '\u{2026}';

/// Text width oracle for the layout pass.
///
/// The default implementation estimates deterministically so layout stays
/// backend-independent; a real text backend can supply exact metrics through
/// the same seam.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> f64;
}

/// Deterministic per-character width estimate for a sans-serif face.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharWidthMeasurer;

impl TextMeasurer for CharWidthMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        units * font_size_px
    }
}

/// Formats a measure value the way it is rendered next to a bar.
///
/// Integral values drop the fractional part so `30.0` probes and renders
/// as `30`.
#[must_use]
pub fn format_measure_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Measures every row's formatted left and right label and returns the
/// running maximum width.
///
/// Must run before `half_graph_bar_max_width` is derived, since that
/// quantity reserves exactly this much space for labels.
#[must_use]
pub fn probe_max_label_width(measurer: &dyn TextMeasurer, rows: &[BarRow]) -> f64 {
    rows.iter()
        .flat_map(|row| [row.left, row.right])
        .fold(0.0_f64, |acc, value| {
            let text = format_measure_value(value);
            acc.max(measurer.measure(&text, VALUE_LABEL_FONT_SIZE_PX))
        })
}

/// Shrinks `text` until it fits within `max_width`.
///
/// Returns the text unchanged when it already fits. Otherwise trailing
/// characters are removed and an ellipsis appended, re-measuring after each
/// removal, until the result fits or nothing remains. The result is stable
/// under re-fitting with the same width.
#[must_use]
pub fn fit_text(
    measurer: &dyn TextMeasurer,
    text: &str,
    max_width: f64,
    font_size_px: f64,
) -> String {
    if measurer.measure(text, font_size_px) <= max_width {
        return text.to_owned();
    }

    let mut kept: Vec<char> = text.chars().collect();
    while !kept.is_empty() {
        kept.pop();
        if kept.is_empty() {
            break;
        }
        let mut candidate: String = kept.iter().collect();
        candidate.push(ELLIPSIS);
        if measurer.measure(&candidate, font_size_px) <= max_width {
            return candidate;
        }
    }

    String::new()
}
