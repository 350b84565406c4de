use std::borrow::Cow;

pub const ELLIPSIS: char = '…';

/// Deterministic, backend-independent width estimate for `text`.
///
/// Per-glyph factors are fractions of the font size for a proportional
/// sans-serif face.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().map(char_width_units).sum::<f64>() * font_size_px
}

fn char_width_units(ch: char) -> f64 {
    match ch {
        '0'..='9' => 0.62,
        '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.34,
        '-' | '+' | '%' => 0.42,
        ' ' => 0.33,
        'i' | 'j' | 'l' | 'I' | 'f' | 't' | 'r' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.86,
        'A'..='Z' => 0.68,
        ELLIPSIS => 1.0,
        _ => 0.58,
    }
}

/// Shortens `text` so its estimated width fits `max_width_px`, ending it with
/// an ellipsis when characters were dropped.
///
/// Never returns an empty string for non-empty input: when not even one
/// character fits, the result is the bare ellipsis.
#[must_use]
pub fn truncate_to_width(text: &str, max_width_px: f64, font_size_px: f64) -> Cow<'_, str> {
    if estimate_text_width_px(text, font_size_px) <= max_width_px {
        return Cow::Borrowed(text);
    }

    let budget = max_width_px - char_width_units(ELLIPSIS) * font_size_px;
    let mut used = 0.0;
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let next = used + char_width_units(ch) * font_size_px;
        if next > budget {
            break;
        }
        used = next;
        end = idx + ch.len_utf8();
    }

    let mut out = String::with_capacity(end + ELLIPSIS.len_utf8());
    out.push_str(text[..end].trim_end());
    out.push(ELLIPSIS);
    Cow::Owned(out)
}
