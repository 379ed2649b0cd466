//! Bean names and the type-to-name wiring convention

use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt;

/// Non-empty identifier of a bean within a catalog
///
/// Uniqueness is a catalog-wide property checked when definitions are
/// listed, not when a name is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeanName(String);

impl BeanName {
    /// Create a bean name, rejecting empty or blank strings
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_bean_name("bean name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Derive the conventional bean name for `T`
    ///
    /// The bare type name with its first character lowercased, so a
    /// dependency of type `TestBean` is wired to the bean `"testBean"`.
    pub fn for_type<T: ?Sized + 'static>() -> Self {
        Self(decapitalize(bare_type_name(std::any::type_name::<T>())))
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BeanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BeanName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BeanName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for BeanName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for BeanName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl PartialEq<str> for BeanName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BeanName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Reduce a full type name to its bare name
///
/// Module paths, generic arguments and leading `&`, `*`, `mut`, `dyn` or
/// `impl` are dropped: `my_app::beans::Repo<my_app::Db>` becomes `Repo`.
/// Tuples, arrays and slices are named after their first element type, the
/// unit type is `unit`, and a trait object after its principal trait
/// (`dyn core::any::Any + core::marker::Send` becomes `Any`).
pub fn bare_type_name(type_name: &str) -> &str {
    let name = strip_type_prefixes(type_name.trim());
    if let Some(inner) = name.strip_prefix(['(', '[']) {
        let first = top_level_segment(inner, &[',', ';', ')', ']']).trim();
        return if first.is_empty() {
            UNIT_TYPE_NAME
        } else {
            bare_type_name(first)
        };
    }
    let principal = top_level_segment(name, &['+']).trim_end();
    let without_generics = top_level_segment(principal, &['<', '(']);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

const UNIT_TYPE_NAME: &str = "unit";

fn strip_type_prefixes(mut name: &str) -> &str {
    loop {
        let trimmed = name.trim_start_matches(['&', '*']).trim_start();
        let trimmed = ["mut ", "const ", "dyn ", "impl "]
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .unwrap_or(trimmed);
        if trimmed.len() == name.len() {
            return name;
        }
        name = trimmed;
    }
}

/// Prefix of `s` up to the first `stops` character outside any brackets
fn top_level_segment<'a>(s: &'a str, stops: &[char]) -> &'a str {
    let mut depth = 0usize;
    let mut previous = ' ';
    for (index, c) in s.char_indices() {
        if depth == 0 && stops.contains(&c) {
            return &s[..index];
        }
        match c {
            '<' | '(' | '[' => depth += 1,
            // `->` in fn pointer types is not a closing bracket
            '>' if previous != '-' => depth = depth.saturating_sub(1),
            ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        previous = c;
    }
    s
}

/// Lowercase the first character of `s`
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
