use indexmap::IndexMap;

use crate::{config::DEFAULT_MAX_TUPLES, error::DomainError, util::num::f64_to_usize_checked};

pub type DomainResult<T> = Result<T, DomainError>;

/// Ordered mapping from variable name to its candidate values.
///
/// Iteration follows declaration order, which fixes the enumeration order of
/// generated tuples.
pub type Domains = IndexMap<String, Vec<f64>>;

/// Parses a domain specification with the default size limit.
///
/// The specification is a comma-separated list of `name:start:step:end`
/// records. Each record produces the sequence `start, start + step, ...`
/// whose length is `ceil((end - start) / step) + 1`. When `end - start` is
/// not a multiple of `step`, the last value overshoots `end` by less than
/// one step.
///
/// # Errors
/// Returns a [`DomainError`] for a record without exactly four fields, a
/// non-numeric or non-finite field, a non-positive step, a repeated name, or
/// a sequence longer than the limit.
///
/// # Example
/// ```
/// use tuplecalc::{error::DomainError, values::domain::parse_domains};
///
/// let domains = parse_domains("x:0:1:2,y:0:0.5:1").unwrap();
/// assert_eq!(domains["x"], vec![0.0, 1.0, 2.0]);
/// assert_eq!(domains["y"], vec![0.0, 0.5, 1.0]);
/// assert_eq!(domains.keys().collect::<Vec<_>>(), ["x", "y"]);
///
/// // Overshoot: 0, 2, 4 and then 6 > 5.
/// assert_eq!(parse_domains("x:0:2:5").unwrap()["x"], vec![0.0, 2.0, 4.0, 6.0]);
///
/// assert_eq!(parse_domains("x:0:0:1").unwrap_err(),
///            DomainError::NonPositiveStep { name: "x".to_string() });
/// ```
pub fn parse_domains(spec: &str) -> DomainResult<Domains> {
    parse_domains_with_limit(spec, DEFAULT_MAX_TUPLES)
}

/// Parses a domain specification, rejecting any sequence longer than
/// `max_values`.
///
/// # Errors
/// See [`parse_domains`].
pub fn parse_domains_with_limit(spec: &str, max_values: usize) -> DomainResult<Domains> {
    let mut records: Vec<&str> = spec.split(',').collect();
    while records.len() > 1 && records.last().is_some_and(|r| r.trim().is_empty()) {
        records.pop();
    }

    let mut domains = Domains::with_capacity(records.len());

    for record in records {
        let (name, values) = parse_record(record, max_values)?;
        if domains.contains_key(&name) {
            return Err(DomainError::DuplicateVariable { name });
        }
        domains.insert(name, values);
    }

    Ok(domains)
}

/// Parses one `name:start:step:end` record into its name and values.
fn parse_record(record: &str, max_values: usize) -> DomainResult<(String, Vec<f64>)> {
    let fields: Vec<&str> = record.split(':').map(str::trim).collect();
    let &[name, start, step, end] = fields.as_slice() else {
        return Err(DomainError::InvalidFormat { record: record.to_string() });
    };

    let parse = |field: &str| {
        field.parse::<f64>()
             .ok()
             .filter(|value| value.is_finite())
             .ok_or_else(|| DomainError::InvalidNumber { name: name.to_string() })
    };
    let (start, step, end) = (parse(start)?, parse(step)?, parse(end)?);

    if step <= 0.0 {
        return Err(DomainError::NonPositiveStep { name: name.to_string() });
    }

    let values =
        generate_values(start, step, end, max_values).ok_or_else(|| DomainError::TooManyValues {
                                                           name:  name.to_string(),
                                                           limit: max_values,
                                                       })?;

    Ok((name.to_string(), values))
}

/// Generates the arithmetic sequence for `(start, step, end)`.
///
/// The length is `ceil((end - start) / step) + 1`, clamped to zero when
/// `end` lies more than one step before `start`. Element `i` is
/// `start + i * step`.
///
/// # Returns
/// `None` if the sequence would be longer than `max_values`.
///
/// # Example
/// ```
/// use tuplecalc::values::domain::generate_values;
///
/// assert_eq!(generate_values(1.0, 1.0, 3.0, 10), Some(vec![1.0, 2.0, 3.0]));
/// assert_eq!(generate_values(0.0, 1.0, 0.0, 10), Some(vec![0.0]));
/// assert_eq!(generate_values(0.0, 1.0, -1.0, 10), Some(vec![]));
/// assert_eq!(generate_values(0.0, 1.0, 100.0, 10), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_values(start: f64, step: f64, end: f64, max_values: usize) -> Option<Vec<f64>> {
    let count = ((end - start) / step).ceil() + 1.0;

    let len = if count > 0.0 {
        if count > max_values as f64 {
            return None;
        }
        f64_to_usize_checked(count)?
    } else {
        0
    };

    Some((0..len).map(|i| start + i as f64 * step).collect())
}
