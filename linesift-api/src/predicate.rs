//! Match predicates
//!
//! A predicate is a pure test over a single line. Closures work directly;
//! [`Substring`] and [`Pattern`] cover the common fixed-string and regex
//! cases.

/// A pure test over a single line
///
/// Implementations must be stateless with respect to the scan: the scanner
/// may evaluate a predicate against any line any number of times without
/// observable effect beyond the returned boolean.
pub trait Predicate {
    /// Whether the line should be included in the scan output
    fn matches(&self, line: &str) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, line: &str) -> bool {
        self(line)
    }
}

/// Fixed-string containment predicate
#[derive(Debug, Clone)]
pub struct Substring(String);

impl Substring {
    /// Create a predicate matching lines that contain `needle`
    pub fn new<S: Into<String>>(needle: S) -> Self {
        Substring(needle.into())
    }
}

impl Predicate for Substring {
    fn matches(&self, line: &str) -> bool {
        line.contains(&self.0)
    }
}

/// Regular-expression predicate
#[derive(Debug, Clone)]
pub struct Pattern(regex::Regex);

impl Pattern {
    /// Compile a regex predicate
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Pattern(regex::Regex::new(pattern)?))
    }
}

impl Predicate for Pattern {
    fn matches(&self, line: &str) -> bool {
        self.0.is_match(line)
    }
}

impl From<regex::Regex> for Pattern {
    fn from(regex: regex::Regex) -> Self {
        Pattern(regex)
    }
}
