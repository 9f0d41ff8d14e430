//! Boundary-aware text windowing for large documents

/// A bounded slice of the source document
///
/// `start` and `end` are character offsets of the untrimmed span in the
/// source; `text` holds that span with surrounding whitespace removed.
/// Windows are produced in strictly increasing `start` order and
/// consecutive spans overlap by at most the configured amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWindow {
    /// Position of this window in the produced sequence
    pub index: usize,

    /// Character offset where the span begins (inclusive)
    pub start: usize,

    /// Character offset where the span ends (exclusive)
    pub end: usize,

    /// The span's text, trimmed of leading and trailing whitespace
    pub text: String,
}

/// Split text into overlapping windows that respect document structure
///
/// Each window covers at most `max_size` characters. A window that would
/// cut the document mid-flow ends instead at the last paragraph break
/// (double newline) past the window's start; failing that, at the last
/// sentence-terminating period; failing both, at the raw size boundary.
/// A boundary at the window's start does not advance the cut and falls
/// through to the next strategy. Sentence detection matches literal `.`
/// characters, so abbreviations and decimal numbers can end a window
/// early.
///
/// Windows are trimmed of surrounding whitespace and dropped when empty
/// after trimming. The cursor advances to `max(start + 1, end - overlap)`
/// after each window, which guarantees forward progress even when the
/// overlap exceeds a short window's length; carving stops once a window
/// reaches the end of the text. Offsets are characters, not bytes.
///
/// Empty input yields an empty sequence. The output is a pure function
/// of the input.
pub fn split(text: &str, max_size: usize, overlap: usize) -> Vec<TextWindow> {
    let chars: Vec<char> = text.chars().collect();
    let text_len = chars.len();

    if text_len == 0 {
        return Vec::new();
    }

    let mut windows = Vec::new();
    let mut start = 0;

    while start < text_len {
        let mut end = (start + max_size).min(text_len);

        if end < text_len {
            if let Some(break_pos) = rfind_paragraph_break(&chars, start, end) {
                end = break_pos + 2;
            } else if let Some(period_pos) = rfind_period(&chars, start, end) {
                end = period_pos + 1;
            }
        }

        let span: String = chars[start..end].iter().collect();
        let trimmed = span.trim();
        if !trimmed.is_empty() {
            windows.push(TextWindow {
                index: windows.len(),
                start,
                end,
                text: trimmed.to_string(),
            });
        }

        if end == text_len {
            break;
        }
        start = (start + 1).max(end.saturating_sub(overlap));
    }

    windows
}

/// Highest offset in `[start, end - 2]` where a paragraph break begins;
/// a break sitting exactly at `start` is rejected
fn rfind_paragraph_break(chars: &[char], start: usize, end: usize) -> Option<usize> {
    let last = end.checked_sub(2)?;
    for pos in (start..=last).rev() {
        if chars[pos] == '\n' && chars[pos + 1] == '\n' {
            return if pos > start { Some(pos) } else { None };
        }
    }
    None
}

/// Highest offset in `[start, end - 1]` holding a period; a period
/// sitting exactly at `start` is rejected
fn rfind_period(chars: &[char], start: usize, end: usize) -> Option<usize> {
    let last = end.checked_sub(1)?;
    for pos in (start..=last).rev() {
        if chars[pos] == '.' {
            return if pos > start { Some(pos) } else { None };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_windows() {
        assert!(split("", 1000, 100).is_empty());
    }

    #[test]
    fn test_whitespace_only_text_yields_no_windows() {
        assert!(split("   \n\n\t  ", 1000, 100).is_empty());
    }

    #[test]
    fn test_short_text_yields_single_window() {
        let text = "  A short status update.  ";
        let windows = split(text, 1000, 100);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].index, 0);
        assert_eq!(windows[0].start, 0);
        assert_eq!(windows[0].end, text.chars().count());
        assert_eq!(windows[0].text, "A short status update.");
    }

    #[test]
    fn test_three_paragraph_document_under_limit_is_one_window() {
        let text = "Para one.\n\nPara two.\n\nPara three.";
        let windows = split(text, 1000, 100);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].text, text);
    }

    #[test]
    fn test_paragraph_break_preferred_over_sentence_break() {
        // Window [0, 20) holds a period at 8 and a paragraph break at 9
        let text = format!("One. Two.\n\nThree {}", "x".repeat(60));
        let windows = split(&text, 20, 0);

        assert_eq!(windows[0].end, 11);
        assert_eq!(windows[0].text, "One. Two.");
    }

    #[test]
    fn test_sentence_break_when_no_paragraph_break() {
        let text = format!("Alpha beta. Gamma delta. {}", "x".repeat(50));
        let windows = split(&text, 20, 5);

        // Last period inside [0, 20) sits at offset 10
        assert_eq!(windows[0].end, 11);
        assert_eq!(windows[0].text, "Alpha beta.");
    }

    #[test]
    fn test_raw_boundary_when_no_break_found() {
        let text = "x".repeat(120);
        let windows = split(&text, 50, 10);

        assert_eq!(windows[0].start, 0);
        assert_eq!(windows[0].end, 50);
    }

    #[test]
    fn test_boundary_at_cursor_is_rejected() {
        // The only period sits at the cursor; the window must fall back
        // to the raw boundary instead of producing a zero-length cut
        let text = format!(".{}", "x".repeat(30));
        let windows = split(&text, 10, 0);

        assert_eq!(windows[0].end, 10);
    }

    #[test]
    fn test_rejected_paragraph_break_falls_through_to_sentence() {
        // Paragraph break at offset 0 is rejected; the period at 5 wins
        let text = format!("\n\nabc. def {}", "x".repeat(30));
        let windows = split(&text, 10, 0);

        assert_eq!(windows[0].end, 6);
        assert_eq!(windows[0].text, "abc.");
    }

    #[test]
    fn test_2500_chars_without_boundaries_yields_three_windows() {
        let text = "a".repeat(2500);
        let windows = split(&text, 1000, 100);

        assert_eq!(windows.len(), 3);
        assert_eq!(
            windows.iter().map(|w| w.start).collect::<Vec<_>>(),
            vec![0, 900, 1800]
        );
        assert_eq!(
            windows.iter().map(|w| w.end).collect::<Vec<_>>(),
            vec![1000, 1900, 2500]
        );
        for pair in windows.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn test_consecutive_windows_share_overlap() {
        let text = "a".repeat(2500);
        let windows = split(&text, 1000, 100);

        for pair in windows.windows(2) {
            assert_eq!(pair[0].end - pair[1].start, 100);
        }
    }

    #[test]
    fn test_degenerate_overlap_still_terminates() {
        let text = "a".repeat(50);
        let windows = split(&text, 10, 9);

        // Cursor creeps one character per window: starts 0..=40
        assert_eq!(windows.len(), 41);
        assert_eq!(windows.last().map(|w| (w.start, w.end)), Some((40, 50)));
    }

    #[test]
    fn test_multibyte_text_uses_char_offsets() {
        let text = format!("Résumé première partie. {}", "é".repeat(40));
        let windows = split(&text, 30, 5);

        let chars: Vec<char> = text.chars().collect();
        for window in &windows {
            let span: String = chars[window.start..window.end].iter().collect();
            assert_eq!(span.trim(), window.text);
        }
    }

    #[test]
    fn test_overlapping_windows_preserve_tail_context() {
        let p1 = "The first section reviews the incident timeline and the paging gaps in detail.";
        let p2 = "The second section assigns remediation work across the platform teams involved.";
        let text = format!("{}\n\n{}", p1, p2);
        let windows = split(&text, 100, 10);

        assert_eq!(windows[0].text, p1);
        // The next window starts before the paragraph break, keeping context
        assert!(windows[1].start < p1.chars().count() + 2);
        assert!(windows[1].text.ends_with(p2));
    }
}
