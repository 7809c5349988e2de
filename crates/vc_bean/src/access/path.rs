//! Parsing of property path expressions.
//!
//! # Syntax
//!
//! - Plain: `name`, segments joined by `.`, e.g. `address.city`
//! - Bracketed: `name[content]`, e.g. `items[3]` or `tags[en]`
//!
//! Bracket content is kept verbatim, dots included (`map[a.b.c]` is a single
//! segment). Whether it is an index or a key depends on the property it
//! qualifies, so the classification happens during traversal.

use alloc::vec::Vec;
use core::fmt;

use crate::error::BeanError;

// -----------------------------------------------------------------------------
// Segment

/// The qualifier of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier<'a> {
    /// A plain property, `name`.
    None,
    /// The raw content between the brackets of `name[content]`.
    Bracket(&'a str),
}

/// One step of a [`PropertyPath`]: a property name plus its qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    name: &'a str,
    qualifier: Qualifier<'a>,
}

impl<'a> Segment<'a> {
    /// Creates a plain segment.
    #[inline]
    pub const fn plain(name: &'a str) -> Self {
        Self {
            name,
            qualifier: Qualifier::None,
        }
    }

    /// Creates a bracketed segment.
    #[inline]
    pub const fn bracket(name: &'a str, content: &'a str) -> Self {
        Self {
            name,
            qualifier: Qualifier::Bracket(content),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub const fn qualifier(&self) -> Qualifier<'a> {
        self.qualifier
    }

    /// Returns the bracket content, if any.
    #[inline]
    pub const fn bracket_content(&self) -> Option<&'a str> {
        match self.qualifier {
            Qualifier::None => None,
            Qualifier::Bracket(content) => Some(content),
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qualifier {
            Qualifier::None => f.write_str(self.name),
            Qualifier::Bracket(content) => write!(f, "{}[{}]", self.name, content),
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyPath

/// A parsed property path: a non-empty sequence of [`Segment`]s.
///
/// # Examples
///
/// ```
/// use vc_bean::access::{PropertyPath, Qualifier};
///
/// let path = PropertyPath::parse("orders[2].tags[en.GB]").unwrap();
///
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.segments()[0].qualifier(), Qualifier::Bracket("2"));
/// assert_eq!(path.segments()[1].bracket_content(), Some("en.GB"));
/// assert_eq!(path.to_string(), "orders[2].tags[en.GB]");
///
/// assert!(PropertyPath::parse("orders[2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> PropertyPath<'a> {
    /// Parses a path with dotted names and bracket qualifiers.
    pub fn parse(source: &'a str) -> Result<Self, BeanError> {
        if source.is_empty() {
            return Err(BeanError::empty_path());
        }

        let bytes = source.as_bytes();
        let mut segments = Vec::new();
        let mut start = 0;
        let mut pos = 0;

        while pos <= bytes.len() {
            match bytes.get(pos) {
                None | Some(b'.') => {
                    segments.push(Segment::plain(name_at(source, start, pos)?));
                    pos += 1;
                    start = pos;
                }
                Some(b'[') => {
                    let name = name_at(source, start, pos)?;
                    let open = pos + 1;
                    let Some(len) = source[open..].find(']') else {
                        return Err(BeanError::unclosed_bracket(name));
                    };
                    let close = open + len;
                    segments.push(Segment::bracket(name, &source[open..close]));

                    pos = close + 1;
                    match bytes.get(pos) {
                        None => break,
                        Some(b'.') => {
                            pos += 1;
                            start = pos;
                            if pos == bytes.len() {
                                return Err(BeanError::empty_name(source));
                            }
                        }
                        Some(_) => {
                            return Err(BeanError::trailing_characters(name, &source[pos..]));
                        }
                    }
                }
                Some(b']') => {
                    let name = &source[start..pos];
                    return Err(BeanError::trailing_characters(name, &source[pos..]));
                }
                Some(_) => pos += 1,
            }
        }

        Ok(Self { source, segments })
    }

    /// Parses a path of dotted names only.
    ///
    /// Bracket notation is rejected with an invalid argument error.
    pub fn parse_plain(source: &'a str) -> Result<Self, BeanError> {
        if source.is_empty() {
            return Err(BeanError::empty_path());
        }
        if source.contains(['[', ']']) {
            return Err(BeanError::brackets_not_allowed(source));
        }

        let segments = source
            .split('.')
            .map(|name| match name.is_empty() {
                true => Err(BeanError::empty_name(source)),
                false => Ok(Segment::plain(name)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { source, segments })
    }

    /// Returns the source text.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Segment<'a>> {
        self.segments.iter()
    }

    /// Returns the number of segments, never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl<'a, 'p> IntoIterator for &'p PropertyPath<'a> {
    type Item = &'p Segment<'a>;
    type IntoIter = core::slice::Iter<'p, Segment<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for PropertyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

#[inline]
fn name_at(source: &str, start: usize, end: usize) -> Result<&str, BeanError> {
    match start < end {
        true => Ok(&source[start..end]),
        false => Err(BeanError::empty_name(source)),
    }
}

// -----------------------------------------------------------------------------
// Index

/// Parses the bracket content of an indexed property as a base-10,
/// non-negative index.
///
/// # Examples
///
/// ```
/// use vc_bean::access::parse_index;
///
/// assert_eq!(parse_index("items", "12").unwrap(), 12);
/// assert!(parse_index("items", "-1").is_err());
/// assert!(parse_index("items", "first").is_err());
/// ```
pub fn parse_index(name: &str, raw: &str) -> Result<usize, BeanError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BeanError::unparsable_index(name, raw));
    }
    raw.parse::<usize>()
        .map_err(|_| BeanError::unparsable_index(name, raw))
}
