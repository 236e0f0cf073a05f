//! Segment-aware namespace values.
//!
//! A [`Namespace`] stores the segments of a logical path such as
//! `App\Models\User` so that prefix checks compare whole segments instead of
//! raw substrings. Input may use `\`, `/` or `.` as the delimiter; the
//! canonical form always uses `\`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Delimiter used in the canonical string form.
pub const NAMESPACE_DELIMITER: char = '\\';

/// Delimiters accepted when parsing.
const INPUT_DELIMITERS: [char; 3] = ['\\', '/', '.'];

/// Immutable, normalized namespace.
///
/// Leading, trailing and repeated delimiters are dropped during parsing, so
/// `"\\App\\Models\\"` and `"App/Models"` produce the same value. The empty
/// string is the root namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// Parse a namespace string. Never fails.
    pub fn parse(s: &str) -> Self {
        Self::from_segments([s])
    }

    /// The root (empty) namespace.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a namespace from segments, dropping empty ones.
    ///
    /// A segment that itself contains a delimiter is split, so the result
    /// always round-trips through its string form.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parts = Vec::new();
        for segment in segments {
            parts.extend(
                segment
                    .as_ref()
                    .split(INPUT_DELIMITERS)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        }
        Self { segments: parts }
    }

    /// Whether `s` contains any accepted namespace delimiter.
    pub fn contains_delimiter(s: &str) -> bool {
        s.contains(INPUT_DELIMITERS)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments. Used for longest-prefix tie breaking.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root namespace.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check whether `prefix` is a segment-aligned prefix of this namespace.
    ///
    /// Every namespace starts with itself and with the root namespace.
    /// `Foo\Bar` does not start with `Foo\Ba`.
    pub fn starts_with(&self, prefix: &Namespace) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Segments left over after removing `prefix`, or `None` if `prefix` is
    /// not a prefix of this namespace.
    pub fn strip_prefix(&self, prefix: &Namespace) -> Option<&[String]> {
        self.segments.strip_prefix(prefix.segments.as_slice())
    }

    /// Append segments, returning a new namespace.
    #[must_use]
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tail = Self::from_segments(segments);
        let mut joined = self.segments.clone();
        joined.extend(tail.segments);
        Self { segments: joined }
    }

    /// Last segment, or `""` for the root namespace.
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(|s| s.as_str()).unwrap_or("")
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{NAMESPACE_DELIMITER}")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Namespace {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Namespace {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> String {
        ns.to_string()
    }
}

impl Serialize for Namespace {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Namespace::parse(&s))
    }
}
