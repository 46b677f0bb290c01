//! Line Sanitizer: breaks over-long tokens so the document engine can wrap them.
//!
//! Document engines wrap on whitespace only; an unbroken 120-character URL either
//! overflows the page or fails the layout. Tokens longer than the limit are cut
//! into fixed-size chunks joined by U+200B, which renders as nothing but is a
//! legal line-break opportunity.
//!
//! Lengths are counted in chars, never bytes.

use std::borrow::Cow;

/// Default maximum token length, in chars.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 50;

/// Zero-width break inserted between chunks of an over-long token.
pub const ZERO_WIDTH_BREAK: char = '\u{200B}';

/// Sanitizes a single line for rendering.
///
/// Tokens are separated by single ASCII spaces; runs of spaces are kept exactly.
/// Existing zero-width breaks count as chunk boundaries, which makes the function
/// idempotent. A `max_token_len` of 0 disables splitting.
pub fn sanitize_line(line: &str, max_token_len: usize) -> String {
    if max_token_len == 0 {
        return line.to_string();
    }

    line.split(' ')
        .map(|token| sanitize_token(token, max_token_len))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sanitize_token(token: &str, max_token_len: usize) -> Cow<'_, str> {
    if token.chars().count() <= max_token_len {
        return Cow::Borrowed(token);
    }

    let chunks: Vec<String> = token
        .split(ZERO_WIDTH_BREAK)
        .flat_map(|piece| chunk_piece(piece, max_token_len))
        .collect();

    Cow::Owned(chunks.join(&ZERO_WIDTH_BREAK.to_string()))
}

/// Splits `piece` into chunks of at most `size` chars. An empty piece stays one empty chunk.
fn chunk_piece(piece: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = piece.chars().collect();
    if chars.len() <= size {
        return vec![piece.to_string()];
    }
    chars.chunks(size).map(|c| c.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_breaks(s: &str) -> String {
        s.chars().filter(|&c| c != ZERO_WIDTH_BREAK).collect()
    }

    #[test]
    fn test_short_tokens_untouched() {
        let line = "Led a team of 5 engineers.";
        assert_eq!(sanitize_line(line, DEFAULT_MAX_TOKEN_LEN), line);
    }

    #[test]
    fn test_long_token_split_into_fixed_chunks() {
        let token = "a".repeat(120);
        let out = sanitize_line(&token, 50);

        let chunks: Vec<&str> = out.split(ZERO_WIDTH_BREAK).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 50);
        assert_eq!(chunks[1].chars().count(), 50);
        assert_eq!(chunks[2].chars().count(), 20);
    }

    #[test]
    fn test_exact_limit_is_not_split() {
        let token = "b".repeat(50);
        assert_eq!(sanitize_line(&token, 50), token);
    }

    #[test]
    fn test_stripping_breaks_restores_input() {
        let line = format!(
            "GitHub: https://github.com/{} | LinkedIn:  {}",
            "x".repeat(73),
            "y".repeat(51)
        );
        let out = sanitize_line(&line, 50);
        assert_ne!(out, line);
        assert_eq!(strip_breaks(&out), line);
    }

    #[test]
    fn test_idempotent() {
        let line = format!("{} short {}", "q".repeat(101), "z".repeat(49));
        let once = sanitize_line(&line, 50);
        let twice = sanitize_line(&once, 50);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_repeated_spaces_preserved() {
        let line = "Rust  and   Go";
        assert_eq!(sanitize_line(line, 3), "Rus\u{200B}t  and   Go");
    }

    #[test]
    fn test_multibyte_chars_counted_not_bytes() {
        // 30 chars but 60+ bytes: must not be split at a 50 limit.
        let token = "é".repeat(30);
        assert_eq!(sanitize_line(&token, 50), token);

        let long = "ü".repeat(60);
        let out = sanitize_line(&long, 50);
        assert_eq!(out.split(ZERO_WIDTH_BREAK).count(), 2);
        assert_eq!(strip_breaks(&out), long);
    }

    #[test]
    fn test_zero_limit_disables_splitting() {
        let token = "w".repeat(500);
        assert_eq!(sanitize_line(&token, 0), token);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(sanitize_line("", 50), "");
    }
}
