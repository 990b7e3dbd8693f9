//! Text measurement used by the size heuristics.

/// Estimates the length of a piece of text in character units.
///
/// The engine multiplies the result by the configured per-character growth
/// (`root_char_width`, `phase_char_growth`), so a measure returns how many
/// "average characters" wide a string is, not pixels.
///
/// Any `Fn(&str) -> f32` is a `TextMeasure`, which lets a renderer plug in
/// real font metrics:
///
/// ```
/// # use waymark::layout::TextMeasure;
/// let wide_caps = |text: &str| {
///     text.chars().map(|c| if c.is_uppercase() { 1.5_f32 } else { 1.0 }).sum::<f32>()
/// };
/// assert_eq!(wide_caps.measure("Go"), 2.5);
/// ```
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f32;
}

/// Counts Unicode scalar values. The default measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCount;

impl TextMeasure for CharCount {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        assert_eq!(CharCount.measure(""), 0.0);
        assert_eq!(CharCount.measure("Rust"), 4.0);
        assert_eq!(CharCount.measure("Café ☕"), 6.0);
    }

    #[test]
    fn test_closure_measure() {
        let fixed = |_: &str| 3.0_f32;
        assert_eq!(fixed.measure("anything"), 3.0);
    }
}
