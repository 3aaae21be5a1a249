use std::str::FromStr;

use indexmap::IndexMap;

use crate::{config::DEFAULT_MAX_TUPLES, error::TupleError, values::domain::Domains};

pub type TupleResult<T> = Result<T, TupleError>;

/// One assignment of a value to every declared variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tuple {
    values: IndexMap<String, f64>,
}

impl Tuple {
    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Overwrites the value of the variable declared at `position`.
    fn set(&mut self, position: usize, value: f64) {
        if let Some((_, slot)) = self.values.get_index_mut(position) {
            *slot = value;
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Tuple {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter()
                           .map(|(name, value)| (name.into(), value))
                           .collect(), }
    }
}

/// How tuples are generated from domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValuesKind {
    /// Full cross product of all domains.
    Grid,
    /// Element-wise pairing of equal-length domains.
    List,
}

impl FromStr for ValuesKind {
    type Err = TupleError;

    /// Parses `GRID` or `LIST`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GRID") {
            Ok(Self::Grid)
        } else if s.eq_ignore_ascii_case("LIST") {
            Ok(Self::List)
        } else {
            Err(TupleError::UnsupportedMode { mode: s.to_string() })
        }
    }
}

impl std::fmt::Display for ValuesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid => write!(f, "GRID"),
            Self::List => write!(f, "LIST"),
        }
    }
}

/// Builds tuples with the default size limit.
///
/// In [`ValuesKind::Grid`] mode the first declared variable varies slowest
/// and the last one fastest. In [`ValuesKind::List`] mode tuple `i` takes
/// the `i`-th value of every domain.
///
/// # Errors
/// - [`TupleError::LengthMismatch`] if `List` domains differ in length.
/// - [`TupleError::TooManyTuples`] if the result would exceed the limit.
///
/// # Example
/// ```
/// use tuplecalc::values::{
///     domain::parse_domains,
///     tuple::{ValuesKind, build_tuples},
/// };
///
/// let domains = parse_domains("x:0:1:1,y:0:1:1").unwrap();
/// let tuples = build_tuples(&domains, ValuesKind::Grid).unwrap();
/// let pairs: Vec<_> = tuples.iter()
///                           .map(|t| (t.get("x").unwrap(), t.get("y").unwrap()))
///                           .collect();
/// assert_eq!(pairs, [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
///
/// let tuples = build_tuples(&domains, ValuesKind::List).unwrap();
/// assert_eq!(tuples.len(), 2);
/// ```
pub fn build_tuples(domains: &Domains, kind: ValuesKind) -> TupleResult<Vec<Tuple>> {
    build_tuples_with_limit(domains, kind, DEFAULT_MAX_TUPLES)
}

/// Builds tuples, rejecting results with more than `max_tuples` entries
/// before allocating them.
///
/// # Errors
/// See [`build_tuples`].
pub fn build_tuples_with_limit(domains: &Domains,
                               kind: ValuesKind,
                               max_tuples: usize)
                               -> TupleResult<Vec<Tuple>> {
    match kind {
        ValuesKind::Grid => build_grid_tuples(domains, max_tuples),
        ValuesKind::List => build_list_tuples(domains, max_tuples),
    }
}

fn build_grid_tuples(domains: &Domains, max_tuples: usize) -> TupleResult<Vec<Tuple>> {
    let count = domains.values()
                       .try_fold(1_usize, |acc, values| acc.checked_mul(values.len()))
                       .filter(|&count| count <= max_tuples)
                       .ok_or(TupleError::TooManyTuples { limit: max_tuples })?;

    let mut tuples = Vec::with_capacity(count);
    if count == 0 {
        return Ok(tuples);
    }

    let columns: Vec<&[f64]> = domains.values().map(Vec::as_slice).collect();
    let mut indices = vec![0_usize; columns.len()];
    let mut current: Tuple = domains.iter()
                                    .map(|(name, values)| (name.as_str(), values[0]))
                                    .collect();

    loop {
        tuples.push(current.clone());
        if !advance(&columns, &mut indices, &mut current) {
            return Ok(tuples);
        }
    }
}

/// Moves `indices` to the next grid position, last variable fastest, and
/// rebinds the variables that changed.
///
/// Returns `false` once every position has been visited. Every column must
/// be non-empty.
fn advance(columns: &[&[f64]], indices: &mut [usize], current: &mut Tuple) -> bool {
    for (position, values) in columns.iter().enumerate().rev() {
        indices[position] += 1;
        if indices[position] < values.len() {
            current.set(position, values[indices[position]]);
            return true;
        }
        indices[position] = 0;
        current.set(position, values[0]);
    }

    false
}

fn build_list_tuples(domains: &Domains, max_tuples: usize) -> TupleResult<Vec<Tuple>> {
    let mut lengths = domains.values().map(Vec::len);
    let Some(len) = lengths.next() else {
        return Ok(Vec::new());
    };
    if lengths.any(|other| other != len) {
        return Err(TupleError::LengthMismatch);
    }
    if len > max_tuples {
        return Err(TupleError::TooManyTuples { limit: max_tuples });
    }

    Ok((0..len).map(|i| {
                   domains.iter()
                          .map(|(name, values)| (name.as_str(), values[i]))
                          .collect::<Tuple>()
               })
               .collect())
}
