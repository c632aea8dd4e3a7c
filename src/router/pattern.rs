use super::captures::{Captures, SmallKvBuffer};
use super::error::RouterError;
use crate::coerce::ValueKind;

use smallvec::SmallVec;

const STAR: char = '*';
const COLON: char = ':';
const SLASH: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(Box<str>),
    Capture {
        name: Box<str>,
        kind: Option<ValueKind>,
    },
    Wildcard(Option<Box<str>>),
}

impl Segment {
    fn parse(part: &str) -> Result<Self, &'static str> {
        if let Some(rest) = part.strip_prefix(COLON) {
            let (name, suffix) = match rest.find(COLON) {
                Some(i) => (&rest[..i], Some(&rest[i + 1..])),
                None => (rest, None),
            };
            if name.is_empty() {
                return Err("capture name can not be empty");
            }
            let kind = match suffix {
                Some(s) => Some(ValueKind::from_suffix(s).ok_or("unknown capture type")?),
                None => None,
            };
            return Ok(Self::Capture {
                name: name.into(),
                kind,
            });
        }
        if let Some(rest) = part.strip_prefix(STAR) {
            let name = if rest.is_empty() {
                None
            } else {
                Some(rest.into())
            };
            return Ok(Self::Wildcard(name));
        }
        Ok(Self::Literal(part.into()))
    }

    fn capture_name(&self) -> Option<&str> {
        match self {
            Self::Literal(_) | Self::Wildcard(None) => None,
            Self::Capture { name, .. } => Some(&**name),
            Self::Wildcard(Some(name)) => Some(&**name),
        }
    }
}

/// A parsed route pattern.
///
/// Segments are separated by `/`:
/// - `users` matches itself byte for byte
/// - `:id` captures one segment, `:id:ulong` only if it parses as that type
/// - `*rest` (final segment only) captures the non-empty remainder of the path;
///   a bare `*` accepts any remainder without capturing it
#[derive(Debug, Clone)]
pub struct Pattern {
    source: Box<str>,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        let path = PathParts::new(pattern);
        let mut segments: Vec<Segment> = Vec::with_capacity(path.len());

        for (i, &part) in path.parts.iter().enumerate() {
            let segment = Segment::parse(part).map_err(|msg| RouterError::new(msg, pattern))?;

            if let Segment::Wildcard(_) = segment {
                if i + 1 != path.len() {
                    return Err(RouterError::new(
                        "wildcard pattern can only appear at end",
                        pattern,
                    ));
                }
            }

            if let Some(name) = segment.capture_name() {
                if segments.iter().any(|s| s.capture_name() == Some(name)) {
                    return Err(RouterError::new("duplicate capture name", pattern));
                }
            }

            segments.push(segment);
        }

        Ok(Self {
            source: pattern.into(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// A static pattern has neither captures nor a wildcard.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard(_)))
    }

    pub fn matches<'a>(&'a self, path: &'a str) -> Option<Captures<'a>> {
        let parts = PathParts::new(path);
        let mut captures = Captures::new();
        if self.match_parts(&parts, &mut captures.buf) {
            Some(captures)
        } else {
            None
        }
    }

    /// On failure `buf` is left as it was.
    pub(super) fn match_parts<'a>(
        &'a self,
        path: &PathParts<'a>,
        buf: &mut SmallKvBuffer<'a>,
    ) -> bool {
        let mark = buf.len();
        let matched = self.walk(path, buf);
        if !matched {
            buf.truncate(mark);
        }
        matched
    }

    fn walk<'a>(&'a self, path: &PathParts<'a>, buf: &mut SmallKvBuffer<'a>) -> bool {
        if !self.has_wildcard() && self.segments.len() != path.len() {
            return false;
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(text) => match path.get(i) {
                    Some(part) if part == &**text => {}
                    _ => return false,
                },
                Segment::Capture { name, kind } => {
                    let part = match path.get(i) {
                        Some(part) => part,
                        None => return false,
                    };
                    if let Some(kind) = kind {
                        if !kind.accepts(part) {
                            return false;
                        }
                    }
                    buf.push((&**name, part));
                }
                Segment::Wildcard(name) => {
                    if let Some(name) = name {
                        let rest = path.rest(i);
                        if rest.is_empty() {
                            return false;
                        }
                        buf.push((&**name, rest));
                    }
                    return true;
                }
            }
        }

        true
    }
}

/// A path split on `/` with the surrounding slashes dropped.
pub(crate) struct PathParts<'a> {
    trimmed: &'a str,
    parts: SmallVec<[&'a str; 8]>,
}

impl<'a> PathParts<'a> {
    pub(crate) fn new(path: &'a str) -> Self {
        let trimmed = trim_slashes(path);
        let parts = if trimmed.is_empty() {
            SmallVec::new()
        } else {
            trimmed.split(SLASH).collect()
        };
        Self { trimmed, parts }
    }

    pub(crate) fn len(&self) -> usize {
        self.parts.len()
    }

    fn get(&self, i: usize) -> Option<&'a str> {
        self.parts.get(i).copied()
    }

    /// The parts from `i` on, joined by `/`.
    fn rest(&self, i: usize) -> &'a str {
        match self.parts.get(i) {
            Some(part) => &self.trimmed[calc_offset(self.trimmed, part)..],
            None => "",
        }
    }
}

#[inline]
pub(crate) fn trim_slashes(path: &str) -> &str {
    path.trim_matches(SLASH)
}

#[inline(always)]
fn calc_offset(src: &str, dst: &str) -> usize {
    (dst.as_ptr() as usize) - (src.as_ptr() as usize)
}
