//! Display value representation
//!
//! This module defines the [`Value`] enum, which every snapshot uses to carry
//! algorithm data in a renderer-friendly, comparable form. Values are tagged,
//! hashable and totally ordered so they can key frequency maps and sets.
//!
//! # Value Types
//!
//! - [`Value::Null`]: absent node / absent result
//! - [`Value::Bool`], [`Value::Int`], [`Value::Char`], [`Value::Str`]: scalars
//! - [`Value::List`]: ordered sequence (queues, paths, collected results)
//! - [`Value::Map`]: key/value pairs, rendered in key order
//! - [`Value::NoPath`]: the "no path" sentinel used by path optimization
//!
//! # Path sums
//!
//! [`PathSum`] is the result type of path optimization. `NoPath` orders below
//! every finite sum, so `max` over child results needs no special casing.

use std::fmt;

/// Values recorded inside snapshots
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Value {
    /// Negative infinity for path sums; orders below every other value
    NoPath,
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Char(char),
    Str(String),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Build a map value with entries sorted by key
    pub fn sorted_map<K, V, I>(entries: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut pairs: Vec<(Value, Value)> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        pairs.sort();
        Value::Map(pairs)
    }

    /// Build a list value from any iterator of convertible items
    pub fn list<T, I>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Char(c) => write!(f, "'{}'", c),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::NoPath => write!(f, "-∞"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl From<(usize, usize)> for Value {
    fn from((i, j): (usize, usize)) -> Self {
        Value::List(vec![Value::from(i), Value::from(j)])
    }
}

/// Result of a root-to-leaf path optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PathSum {
    /// No root-to-leaf path exists below this point
    #[default]
    NoPath,
    Sum(i64),
}

impl PathSum {
    /// Extend a child's best path by a parent value
    pub fn add(self, value: i64) -> PathSum {
        match self {
            PathSum::NoPath => PathSum::NoPath,
            PathSum::Sum(s) => PathSum::Sum(s.saturating_add(value)),
        }
    }
}

impl From<PathSum> for Value {
    fn from(sum: PathSum) -> Self {
        match sum {
            PathSum::NoPath => Value::NoPath,
            PathSum::Sum(s) => Value::Int(s),
        }
    }
}

impl fmt::Display for PathSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Value::from(*self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_orders_below_sums() {
        assert!(PathSum::NoPath < PathSum::Sum(i64::MIN));
        assert_eq!(PathSum::NoPath.max(PathSum::Sum(-5)), PathSum::Sum(-5));
        assert_eq!(PathSum::NoPath.add(3), PathSum::NoPath);
    }

    #[test]
    fn test_no_path_value_orders_below_integers() {
        assert!(Value::NoPath < Value::Int(i64::MIN));
        assert!(Value::NoPath < Value::Int(0));
        assert_eq!(Value::from(PathSum::NoPath).max(Value::Int(-7)), Value::Int(-7));
    }

    #[test]
    fn test_sorted_map_display() {
        let map = Value::sorted_map(vec![('b', 2i64), ('a', 1i64)]);
        assert_eq!(map.to_string(), "{'a': 1, 'b': 2}");
        assert_eq!(Value::from(PathSum::NoPath).to_string(), "-∞");
    }
}
