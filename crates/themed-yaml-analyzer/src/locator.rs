//! Token locator: maps parsed keys and values back to the source text.
//!
//! The YAML tree does not keep source positions, so every position reported
//! by the analyzer is recovered by scanning the raw text forward from a known
//! offset. Two searches are provided:
//!
//! - [`locate_key`] finds a line of the form `<indentation><key>:`. Keys are
//!   anchored at the start of a line, so a key is never matched inside a
//!   value. Quoted keys (`'.type':`, `"dark":`) are recognized too.
//! - [`locate_literal`] finds the first occurrence of a value literal.
//! - [`locate_scalar`] reads the plain scalar written after a located key.
//!
//! A key that cannot be found means the parsed tree and the text disagree;
//! that is reported as [`LocateError`] and aborts the pass.
//!
//! [`Cursor`] threads the scan offset through the analysis so that scans only
//! ever move forward.

use log::trace;
use thiserror::Error;
use winnow::{
    Parser as _,
    combinator::opt,
    error::{ContextError, ErrMode},
    token::{literal, one_of, take_till, take_while},
};

use crate::span::Span;

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// The parsed tree and the raw text disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("key `{key}` not found in the text after offset {from}")]
    KeyNotFound { key: String, from: usize },
}

/// Parse the indentation at the start of a line
fn indentation<'src>(input: &mut &'src str) -> IResult<&'src str> {
    take_while(0.., [' ', '\t']).parse_next(input)
}

/// Parse an optional quote around a key
fn key_quote(input: &mut &str) -> IResult<Option<char>> {
    opt(one_of(['\'', '"'])).parse_next(input)
}

/// Parse the key name itself
fn key_name<'src>(input: &mut &'src str, key: &str) -> IResult<&'src str> {
    literal(key).parse_next(input)
}

/// Parse the closing quote if the key was quoted
fn closing_quote(input: &mut &str, quote: Option<char>) -> IResult<()> {
    match quote {
        Some(quote) => quote.void().parse_next(input),
        None => Ok(()),
    }
}

/// Parse the colon ending a key
fn colon(input: &mut &str) -> IResult<()> {
    ':'.void().parse_next(input)
}

/// Parse a plain scalar up to a comment, a flow separator or the line end
fn plain_scalar<'src>(input: &mut &'src str) -> IResult<&'src str> {
    take_till(0.., ['#', ',', '}', ']', '\n', '\r']).parse_next(input)
}

/// Match `key` at the start of `line`, returning the byte range of the key
/// name within the line.
fn key_at_line_start(line: &str, key: &str) -> Option<std::ops::Range<usize>> {
    let mut input = line;
    let indent = indentation(&mut input).ok()?;
    let quote = key_quote(&mut input).ok()?;
    key_name(&mut input, key).ok()?;
    closing_quote(&mut input, quote).ok()?;
    colon(&mut input).ok()?;

    let start = indent.len() + quote.map_or(0, char::len_utf8);
    Some(start..start + key.len())
}

/// Find the first line at or after `from` that declares `key`.
///
/// The text from `from` up to the next newline counts as a line, so a scan
/// may start right after a parent key on the same line.
///
/// # Errors
///
/// Returns [`LocateError::KeyNotFound`] if no such line exists.
pub fn locate_key(source: &str, from: usize, key: &str) -> Result<Span, LocateError> {
    let mut line_start = from;
    for line in source[from..].split_inclusive('\n') {
        if let Some(range) = key_at_line_start(line, key) {
            let span = Span::new(line_start + range.start..line_start + range.end);
            trace!(key = key, start = span.start(); "Located key");
            return Ok(span);
        }
        line_start += line.len();
    }

    Err(LocateError::KeyNotFound {
        key: key.to_string(),
        from,
    })
}

/// Find the first occurrence of `literal` at or after `from`.
pub fn locate_literal(source: &str, from: usize, literal: &str) -> Option<Span> {
    if literal.is_empty() {
        return None;
    }
    source
        .get(from..)?
        .find(literal)
        .map(|idx| Span::new(from + idx..from + idx + literal.len()))
}

/// Find the plain scalar written right after the key at `key`, on the same
/// line.
///
/// Returns `None` when the key is followed by a nested block or nothing.
///
/// # Examples
///
/// ```
/// use themed_yaml_analyzer::{Span, locate_scalar};
///
/// let source = "light: 10e00000 # exponent-like\n";
/// let value = locate_scalar(source, Span::new(0..5)).unwrap();
/// assert_eq!(&source[value.start()..value.end()], "10e00000");
/// ```
pub fn locate_scalar(source: &str, key: Span) -> Option<Span> {
    let mut input = source.get(key.end()..)?;
    key_quote(&mut input).ok()?;
    colon(&mut input).ok()?;
    indentation(&mut input).ok()?;

    let start = source.len() - input.len();
    let text = plain_scalar(&mut input).ok()?.trim_end();
    (!text.is_empty()).then(|| Span::new(start..start + text.len()))
}

/// A forward-only scan position in the source text.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at `offset`.
    pub fn new(source: &'src str, offset: usize) -> Self {
        Self { source, offset }
    }

    /// Returns the current offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Locate `key` from the current offset.
    pub fn key(&self, key: &str) -> Result<Span, LocateError> {
        locate_key(self.source, self.offset, key)
    }

    /// Locate `literal` from the current offset.
    pub fn literal(&self, literal: &str) -> Option<Span> {
        locate_literal(self.source, self.offset, literal)
    }

    /// Returns a cursor moved to `offset`, never moving backward.
    pub fn advance_to(self, offset: usize) -> Self {
        Self {
            source: self.source,
            offset: self.offset.max(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_key_at_line_start() {
        let source = "colors:\n  primary:\n    light: ffffffff\n";

        let span = locate_key(source, 0, "light").unwrap();
        assert_eq!(&source[span.start()..span.end()], "light");
        assert_eq!(span.start(), 23);
    }

    #[test]
    fn test_locate_key_ignores_values() {
        let source = "a:\n  import: dark\n  dark: ff000000\n";

        let span = locate_key(source, 0, "dark").unwrap();
        assert_eq!(span.start(), source.rfind("dark").unwrap());
    }

    #[test]
    fn test_locate_key_requires_colon() {
        let source = "darker: 1\ndark: 2\n";

        let span = locate_key(source, 0, "dark").unwrap();
        assert_eq!(span.start(), 10);
    }

    #[test]
    fn test_locate_key_from_offset() {
        let source = "a:\n  x: 1\nb:\n  x: 2\n";

        let second = locate_key(source, 11, "x").unwrap();
        assert_eq!(second.start(), 15);
    }

    #[test]
    fn test_locate_key_dot_is_literal() {
        let source = "a:\n  x.type: 1\n  .type: int\n";

        let span = locate_key(source, 0, ".type").unwrap();
        assert_eq!(span.start(), 17);
    }

    #[test]
    fn test_locate_key_quoted() {
        let source = "item:\n  '.type': color\n  \"dark\": ff000000\n";

        let span = locate_key(source, 0, ".type").unwrap();
        assert_eq!(&source[span.start()..span.end()], ".type");
        let span = locate_key(source, 0, "dark").unwrap();
        assert_eq!(&source[span.start()..span.end()], "dark");
    }

    #[test]
    fn test_locate_key_with_tabs() {
        let source = "a:\n\tb: 1\n";

        assert_eq!(locate_key(source, 0, "b").unwrap().start(), 4);
    }

    #[test]
    fn test_locate_key_not_found() {
        let source = "a: 1\n";

        assert_eq!(
            locate_key(source, 0, "b"),
            Err(LocateError::KeyNotFound {
                key: "b".to_string(),
                from: 0
            })
        );
    }

    #[test]
    fn test_locate_literal() {
        let source = "a: {import: colors.primary}\n";

        let span = locate_literal(source, 0, "colors.primary").unwrap();
        assert_eq!(span, Span::new(12..26));
        assert!(locate_literal(source, 20, "colors.primary").is_none());
        assert!(locate_literal(source, 0, "").is_none());
    }

    #[test]
    fn test_locate_scalar() {
        let source = "a:\n  light: 10e00000\n  'dark': 00000001 # comment\n  flow: {value: 1e2, withOpacity: 0.5}\n";

        let light = locate_key(source, 0, "light").unwrap();
        let value = locate_scalar(source, light).unwrap();
        assert_eq!(&source[value.start()..value.end()], "10e00000");

        let dark = locate_key(source, 0, "dark").unwrap();
        let value = locate_scalar(source, dark).unwrap();
        assert_eq!(&source[value.start()..value.end()], "00000001");

        let flow_value = locate_literal(source, 0, "value").unwrap();
        let value = locate_scalar(source, flow_value).unwrap();
        assert_eq!(&source[value.start()..value.end()], "1e2");

        assert!(locate_scalar(source, Span::new(0..1)).is_none());
    }

    #[test]
    fn test_cursor_never_moves_backward() {
        let cursor = Cursor::new("abc", 2);

        assert_eq!(cursor.advance_to(1).offset(), 2);
        assert_eq!(cursor.advance_to(3).offset(), 3);
    }
}
