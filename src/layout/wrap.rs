use super::measure::measure_width;
use crate::{metrics::FontMetrics, standard::StandardFont, Pt};

const TABSIZE: usize = 4;

/// Split a single token that is too wide for `limit` into fragments that fit.
///
/// Breaks are taken before any non-alphanumeric character, so URLs, paths, and
/// hyphenated words split at their punctuation, and otherwise wherever the fragment
/// would grow past `limit`. A fragment is cut before the character that would push it
/// over `limit`, not after, so with proportional fonts fragments can come out shorter
/// than a fill-then-cut splitter would make them (Helvetica at 1pt with a limit of 5
/// breaks `happymonkeyday` into `happymon` and `keyday`). Adjacent fragments are then
/// merged back together as long as the merged fragment still fits, to keep the fragment
/// count down.
///
/// Concatenating the returned fragments reproduces `token` exactly. A character that is
/// wider than `limit` on its own is returned as its own fragment.
///
/// ```
/// use pdf_wrap::{layout::break_token, Pt, StandardFont};
///
/// let parts = break_token(&StandardFont::Courier, Pt(16.0), "example.com/some/path", Pt(110.0));
/// assert_eq!(parts, vec!["example.com", "/some/path"]);
/// ```
pub fn break_token<F: FontMetrics + ?Sized>(
    font: &F,
    size: Pt,
    token: &str,
    limit: Pt,
) -> Vec<String> {
    // scan: prefer punctuation boundaries, never let a fragment grow past the limit
    let mut pieces: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in token.chars() {
        if !current.is_empty() && breaks_before(font, size, &current, ch, limit) {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    // merge: recombine adjacent pieces while they still fit
    let (mut fragments, last) = pieces.into_iter().fold(
        (Vec::new(), String::new()),
        |(mut fragments, chunk): (Vec<String>, String), piece| {
            if chunk.is_empty() {
                return (fragments, piece);
            }
            let merged = format!("{chunk}{piece}");
            if measure_width(font, size, &merged) > limit {
                fragments.push(chunk);
                (fragments, piece)
            } else {
                (fragments, merged)
            }
        },
    );
    if !last.is_empty() {
        fragments.push(last);
    }

    log::trace!(
        "broke token of {} chars into {} fragments",
        token.chars().count(),
        fragments.len()
    );
    fragments
}

fn breaks_before<F: FontMetrics + ?Sized>(
    font: &F,
    size: Pt,
    fragment: &str,
    next: char,
    limit: Pt,
) -> bool {
    if !next.is_alphanumeric() || measure_width(font, size, fragment) >= limit {
        return true;
    }
    let mut grown = String::with_capacity(fragment.len() + next.len_utf8());
    grown.push_str(fragment);
    grown.push(next);
    measure_width(font, size, &grown) > limit
}

/// Wrap `text` into lines that each measure no wider than `limit`.
///
/// Text is split into words on spaces (runs of spaces collapse) and words are greedily
/// packed onto lines separated by a single space. Any word that is too wide for a line
/// by itself is first split with [break_token]. The only lines that may exceed `limit`
/// are those holding a single character that is wider than `limit` on its own.
///
/// Returned lines are trimmed and never empty. They contain the original characters;
/// sanitization only happens during measurement.
///
/// ```
/// use pdf_wrap::{layout::wrap, Pt, StandardFont};
///
/// let lines = wrap(&StandardFont::Helvetica, Pt(1.0), "happy monkey day", Pt(5.0));
/// assert_eq!(lines, vec!["happy", "monkey", "day"]);
/// ```
pub fn wrap<F: FontMetrics + ?Sized>(font: &F, size: Pt, text: &str, limit: Pt) -> Vec<String> {
    let tokens = text
        .split(' ')
        .filter(|token| !token.trim().is_empty())
        .flat_map(|token| {
            if measure_width(font, size, token) > limit {
                break_token(font, size, token, limit)
            } else {
                vec![token.to_string()]
            }
        });

    let (mut lines, last) = tokens.fold(
        (Vec::new(), String::new()),
        |(mut lines, line): (Vec<String>, String), token| {
            if line.is_empty() {
                return (lines, token);
            }
            let extended = format!("{line} {token}");
            if measure_width(font, size, &extended) > limit {
                lines.push(line);
                (lines, token)
            } else {
                (lines, extended)
            }
        },
    );
    lines.push(last);

    let lines: Vec<String> = lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    log::debug!(
        "wrapped {} chars into {} lines at {} / {}",
        text.chars().count(),
        lines.len(),
        size,
        limit
    );
    lines
}

/// Wrap text that may contain hard line breaks.
///
/// Newlines (`\n`, `\r\n`, or `\r`) end a paragraph and tabs expand to four spaces. Each
/// paragraph is wrapped with [wrap]; blank paragraphs produce an empty line list so
/// that callers can still leave a gap for them.
pub fn wrap_paragraphs<F: FontMetrics + ?Sized>(
    font: &F,
    size: Pt,
    text: &str,
    limit: Pt,
) -> Vec<Vec<String>> {
    // replace tabs with spaces
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    text.split('\n')
        .map(|paragraph| wrap(font, size, paragraph, limit))
        .collect()
}

/// Default settings for wrapping when the caller doesn't pick a font
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WrapConfig {
    pub font: StandardFont,
    pub size: Pt,
}

impl Default for WrapConfig {
    fn default() -> Self {
        WrapConfig {
            font: StandardFont::Helvetica,
            size: Pt(10.0),
        }
    }
}

impl WrapConfig {
    pub fn wrap(&self, text: &str, limit: Pt) -> Vec<String> {
        wrap(&self.font, self.size, text, limit)
    }

    pub fn measure(&self, text: &str) -> Pt {
        measure_width(&self.font, self.size, text)
    }
}

/// [wrap] using 10pt Helvetica
pub fn wrap_default(text: &str, limit: Pt) -> Vec<String> {
    WrapConfig::default().wrap(text, limit)
}

/// [measure_width] using 10pt Helvetica
pub fn measure_default(text: &str) -> Pt {
    WrapConfig::default().measure(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every glyph is 960 units wide, so one unit per character at size 1
    struct Mono;

    impl FontMetrics for Mono {
        fn raw_width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 960.0
        }

        fn can_encode(&self, ch: char) -> bool {
            ch.is_ascii()
        }
    }

    /// Like [Mono], but `W` is ten times wider than everything else
    struct WideW;

    impl FontMetrics for WideW {
        fn raw_width(&self, text: &str) -> f32 {
            text.chars()
                .map(|ch| if ch == 'W' { 9600.0_f32 } else { 960.0 })
                .sum()
        }

        fn can_encode(&self, _ch: char) -> bool {
            true
        }
    }

    #[test]
    fn breaks_long_token_into_limit_sized_chunks() {
        assert_eq!(
            break_token(&Mono, Pt(1.0), "happymonkeyday", Pt(5.0)),
            vec!["happy", "monke", "yday"]
        );
    }

    #[test]
    fn breaks_at_punctuation_then_merges() {
        assert_eq!(
            break_token(&Mono, Pt(1.0), "www.example.com/path", Pt(12.0)),
            vec!["www.example", ".com/path"]
        );
    }

    #[test]
    fn proportional_fragments_are_cut_before_overflowing() {
        assert_eq!(
            break_token(&StandardFont::Helvetica, Pt(1.0), "happymonkeyday", Pt(5.0)),
            vec!["happymon", "keyday"]
        );
    }

    #[test]
    fn break_reassembles_to_original() {
        let token = "https://example.org/a-very_long/path?query=value&other=1";
        let parts = break_token(&Mono, Pt(1.0), token, Pt(7.0));
        assert_eq!(parts.concat(), token);
        assert!(parts.iter().all(|part| !part.is_empty()));
        assert!(parts
            .iter()
            .all(|part| measure_width(&Mono, Pt(1.0), part) <= Pt(7.0)));
    }

    #[test]
    fn keeps_oversized_glyph_as_its_own_fragment() {
        assert_eq!(
            break_token(&WideW, Pt(1.0), "aWb", Pt(5.0)),
            vec!["a", "W", "b"]
        );
    }

    #[test]
    fn break_keeps_unencodable_chars_in_output() {
        let parts = break_token(&Mono, Pt(1.0), "héllowörld", Pt(5.0));
        assert_eq!(parts.concat(), "héllowörld");
    }

    #[test]
    fn empty_token_has_no_fragments() {
        assert!(break_token(&Mono, Pt(1.0), "", Pt(5.0)).is_empty());
    }

    #[test]
    fn wraps_unbroken_token() {
        assert_eq!(
            wrap(&Mono, Pt(1.0), "happymonkeyday", Pt(5.0)),
            vec!["happy", "monke", "yday"]
        );
    }

    #[test]
    fn everything_fits_on_one_line() {
        assert_eq!(
            wrap(&Mono, Pt(1.0), "happy monkey day", Pt(50.0)),
            vec!["happy monkey day"]
        );
    }

    #[test]
    fn breaks_only_the_oversized_word() {
        let lines = wrap(&Mono, Pt(10.0), "happymonkey day", Pt(50.0));
        assert_eq!(lines, vec!["happy", "monke", "y day"]);
        assert!(lines
            .iter()
            .all(|line| measure_width(&Mono, Pt(10.0), line) <= Pt(50.0)));
    }

    #[test]
    fn fills_lines_up_to_exact_limit() {
        // "aa bb" is exactly 5 wide, which fits
        assert_eq!(
            wrap(&Mono, Pt(1.0), "aa bb cc", Pt(5.0)),
            vec!["aa bb", "cc"]
        );
    }

    #[test]
    fn collapses_repeated_spaces() {
        assert_eq!(
            wrap(&Mono, Pt(1.0), "  one   two  ", Pt(50.0)),
            vec!["one two"]
        );
    }

    #[test]
    fn blank_input_yields_no_lines() {
        assert!(wrap(&Mono, Pt(1.0), "", Pt(5.0)).is_empty());
        assert!(wrap(&Mono, Pt(1.0), "     ", Pt(5.0)).is_empty());
    }

    #[test]
    fn urls_split_at_separators() {
        assert_eq!(
            wrap(&Mono, Pt(1.0), "see www.example.com/path now", Pt(12.0)),
            vec!["see", "www.example", ".com/path", "now"]
        );
    }

    #[test]
    fn oversized_glyph_gets_a_line_to_itself() {
        assert_eq!(
            wrap(&WideW, Pt(1.0), "a W b", Pt(5.0)),
            vec!["a", "W", "b"]
        );
    }

    #[test]
    fn non_positive_limit_emits_one_char_per_line() {
        assert_eq!(
            wrap(&Mono, Pt(1.0), "ab cd", Pt(0.0)),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(wrap(&Mono, Pt(1.0), "ab", Pt(-3.0)), vec!["a", "b"]);
    }

    #[test]
    fn paragraphs_respect_hard_breaks() {
        let paragraphs = wrap_paragraphs(&Mono, Pt(1.0), "one two\r\n\nthree\tfour", Pt(50.0));
        assert_eq!(
            paragraphs,
            vec![
                vec!["one two".to_string()],
                vec![],
                vec!["three four".to_string()],
            ]
        );
    }

    #[test]
    fn default_config_is_ten_point_helvetica() {
        let config = WrapConfig::default();
        assert_eq!(config.font, StandardFont::Helvetica);
        assert_eq!(config.size, Pt(10.0));
        assert_eq!(
            wrap_default("happy monkey day", Pt(50.0)),
            vec!["happy", "monkey", "day"]
        );
        assert!(measure_default("some text") > Pt(0.0));
    }
}
