//! Greedy word-wrap over per-character advances.

use smallvec::SmallVec;

/// Break offsets produced by one wrap pass. Strictly non-decreasing,
/// always terminated by the character count. Consumed by the
/// positioning pass and never persisted.
pub type LineBreakList = SmallVec<[usize; 16]>;

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Computes line-break offsets for `chars` with the given parallel
/// advance widths and a maximum line width (`f32::INFINITY` for none).
///
/// Single left-to-right pass. A `'\n'` emits a hard break at its own
/// index. When the accumulated width exceeds `max_width`, the break
/// lands on the last space-delimited word boundary of the line and the
/// scan resumes right after it; with no boundary available the word is
/// cut mid-character instead of overflowing. The break character's own
/// advance opens the next line's accumulation, whichever kind of break
/// was taken.
///
/// The fallback cut is not re-checked against `max_width`: a single
/// character wider than the line still overflows by its own width.
pub fn break_lines(chars: &[char], advances: &[f32], max_width: f32) -> LineBreakList {
    debug_assert_eq!(chars.len(), advances.len());

    let mut breaks = LineBreakList::new();
    let mut in_word = false;
    let mut word_end: Option<usize> = None;
    let mut width_accum = 0.0f32;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            breaks.push(i);
            width_accum = 0.;
            word_end = None;
        } else if width_accum > max_width {
            match word_end.take() {
                // no word boundary on this line: cut mid-word rather
                // than render past the limit
                None => breaks.push(i),
                Some(end) => {
                    breaks.push(end);
                    i = end;
                }
            }
            width_accum = 0.;
        } else if is_space(c) {
            if in_word {
                word_end = Some(i);
            }
            in_word = false;
        } else {
            in_word = true;
        }
        width_accum += advances[i];
        i += 1;
    }

    breaks.push(chars.len());
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Advances with 10px letters and narrower 5px spaces.
    fn advances_for(chars: &[char]) -> Vec<f32> {
        chars
            .iter()
            .map(|&c| if c == ' ' { 5. } else { 10. })
            .collect()
    }

    #[test]
    fn breaks_are_terminated_by_length() {
        let chars = chars_of("hello world");
        let advances = advances_for(&chars);
        let breaks = break_lines(&chars, &advances, 40.);
        assert_eq!(*breaks.last().unwrap(), chars.len());
    }

    #[test]
    fn empty_string_yields_single_zero_offset() {
        let breaks = break_lines(&[], &[], 100.);
        assert_eq!(breaks.as_slice(), &[0]);
    }

    #[test]
    fn three_words_break_at_both_spaces() {
        // "AAAA AAAA AAAA" with 10px letters and a 35px limit: the
        // first and second words each overflow the line, leaving the
        // third on its own.
        let chars = chars_of("AAAA AAAA AAAA");
        let advances = advances_for(&chars);
        let breaks = break_lines(&chars, &advances, 35.);
        assert_eq!(breaks.as_slice(), &[4, 9, 14]);
    }

    #[test]
    fn newline_is_a_hard_break() {
        let chars = chars_of("hello\nworld");
        let advances = advances_for(&chars);
        let breaks = break_lines(&chars, &advances, f32::INFINITY);
        assert_eq!(breaks.as_slice(), &[5, 11]);
    }

    #[test]
    fn word_boundary_rewind_resumes_after_the_space() {
        let chars = chars_of("aa bb cc");
        let advances = advances_for(&chars);
        let breaks = break_lines(&chars, &advances, 28.);
        assert_eq!(breaks.as_slice(), &[2, 5, 8]);
    }

    #[test]
    fn spaceless_overflow_cuts_every_character() {
        let chars = chars_of("abcdef");
        let advances = vec![10.; chars.len()];
        let breaks = break_lines(&chars, &advances, 5.);
        assert_eq!(breaks.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn oversized_leading_character_still_overflows() {
        // Permissive fallback: the 50px character is wider than the
        // whole line and is not cut down to fit.
        let chars = chars_of("wide");
        let advances = vec![50., 10., 10., 10.];
        let breaks = break_lines(&chars, &advances, 35.);
        assert_eq!(breaks.as_slice(), &[1, 4]);
    }

    #[test]
    fn breaks_are_non_decreasing_for_arbitrary_input() {
        fastrand::seed(0x7e111);
        for _ in 0..200 {
            let len = fastrand::usize(0..64);
            let chars: Vec<char> = (0..len)
                .map(|_| match fastrand::u8(0..10) {
                    0 => ' ',
                    1 => '\n',
                    2 => '\t',
                    _ => fastrand::alphanumeric(),
                })
                .collect();
            let advances: Vec<f32> = (0..len).map(|_| fastrand::f32() * 20.).collect();
            let max_width = fastrand::f32() * 100.;

            let breaks = break_lines(&chars, &advances, max_width);
            assert!(breaks.windows(2).all(|pair| pair[0] <= pair[1]));
            assert_eq!(*breaks.last().unwrap(), len);
        }
    }
}
