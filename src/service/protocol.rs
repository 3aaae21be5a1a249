use std::time::Duration;

use crate::{
    error::{Error, RequestError},
    interpreter::evaluator::reduce::ComputationKind,
    values::tuple::ValuesKind,
};

/// Line that closes the connection.
pub const QUIT_REQUEST: &str = "BYE";
/// Prefix shared by all statistics requests.
pub const STAT_PREFIX: &str = "STAT_";

/// A statistic the service can report about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// `STAT_REQS`: number of requests served.
    Requests,
    /// `STAT_AVG_TIME`: mean response time in seconds.
    AvgTime,
    /// `STAT_MAX_TIME`: largest response time in seconds.
    MaxTime,
}

/// A decoded `<Computation>_<Values>;<domains>;<expressions>` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeRequest {
    /// The aggregate to compute.
    pub computation: ComputationKind,
    /// How tuples are generated.
    pub values:      ValuesKind,
    /// Domain specification, `name:start:step:end` records.
    pub domains:     String,
    /// Comma-separated expression texts.
    pub expressions: String,
}

/// A decoded request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Close the connection.
    Quit,
    /// Report a statistic.
    Stat(StatKind),
    /// Run a computation.
    Compute(ComputeRequest),
}

impl Request {
    /// Decodes one request line.
    ///
    /// Empty fields at the end of a computation line are dropped, so
    /// `MAX_GRID;x:0:1:2;x;` is the same request as `MAX_GRID;x:0:1:2;x`.
    ///
    /// # Errors
    /// Returns [`RequestError`] for lines that are neither `BYE`, a known
    /// `STAT_` request nor a well-formed computation, and
    /// [`crate::error::TupleError::UnsupportedMode`] for an unknown values
    /// kind.
    ///
    /// # Example
    /// ```
    /// use tuplecalc::{
    ///     interpreter::evaluator::reduce::ComputationKind,
    ///     service::protocol::{Request, StatKind},
    ///     values::tuple::ValuesKind,
    /// };
    ///
    /// assert_eq!(Request::parse("BYE").unwrap(), Request::Quit);
    /// assert_eq!(Request::parse("STAT_REQS").unwrap(), Request::Stat(StatKind::Requests));
    ///
    /// let Request::Compute(request) = Request::parse("max_grid;x:0:1:2;(x*x)").unwrap() else {
    ///     panic!("expected a computation");
    /// };
    /// assert_eq!(request.computation, ComputationKind::Max);
    /// assert_eq!(request.values, ValuesKind::Grid);
    /// assert_eq!(request.expressions, "(x*x)");
    ///
    /// assert!(Request::parse("STAT_NOPE").is_err());
    /// assert!(Request::parse("MAX_GRID;x:0:1:2").is_err());
    ///
    /// // Trailing empty fields are ignored.
    /// assert!(Request::parse("MAX_GRID;x:0:1:2;x;").is_ok());
    /// ```
    pub fn parse(line: &str) -> Result<Self, Error> {
        if line == QUIT_REQUEST {
            return Ok(Self::Quit);
        }

        if line.starts_with(STAT_PREFIX) {
            let kind = match line {
                "STAT_REQS" => StatKind::Requests,
                "STAT_AVG_TIME" => StatKind::AvgTime,
                "STAT_MAX_TIME" => StatKind::MaxTime,
                _ => return Err(RequestError::UnknownStat.into()),
            };
            return Ok(Self::Stat(kind));
        }

        let mut parts: Vec<&str> = line.split(';').collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        let &[kinds, domains, expressions] = parts.as_slice() else {
            return Err(RequestError::InvalidFormat.into());
        };

        let kinds: Vec<&str> = kinds.split('_').collect();
        let &[computation, values] = kinds.as_slice() else {
            return Err(RequestError::InvalidKindFormat.into());
        };

        Ok(Self::Compute(ComputeRequest { computation: computation.parse()?,
                                          values:      values.parse()?,
                                          domains:     domains.to_string(),
                                          expressions: expressions.to_string(), }))
    }
}

/// The answer to one request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Successful answer with its payload.
    Ok(String),
    /// Failure with a human-readable message.
    Err(String),
}

impl Response {
    /// Successful numeric answer.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Ok(format_number(value))
    }

    /// Successful answer carrying a duration in seconds.
    #[must_use]
    pub fn seconds(value: f64) -> Self {
        Self::Ok(format_seconds(value))
    }

    /// Renders the response line, without the trailing newline.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use tuplecalc::service::protocol::Response;
    ///
    /// let elapsed = Duration::from_millis(12);
    /// assert_eq!(Response::number(5.0).render(elapsed), "OK;5.0;0.012");
    /// assert_eq!(Response::Err("boom".to_string()).render(elapsed), "ERR;boom;0.012");
    /// ```
    #[must_use]
    pub fn render(&self, elapsed: Duration) -> String {
        let time = format_seconds(elapsed.as_secs_f64());
        match self {
            Self::Ok(payload) => format!("OK;{payload};{time}"),
            Self::Err(message) => format!("ERR;{message};{time}"),
        }
    }
}

/// Formats a computed value so that it always shows a decimal point.
///
/// Very large and very small magnitudes use exponent notation, with `.0`
/// added to a bare mantissa. Infinities and NaN are printed as `inf`,
/// `-inf` and `NaN`.
///
/// # Example
/// ```
/// use tuplecalc::service::protocol::format_number;
///
/// assert_eq!(format_number(3.0), "3.0");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(1e20), "1.0e20");
/// assert_eq!(format_number(-2.5e-7), "-2.5e-7");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => format!("{mantissa}.0e{exponent}"),
        _ => text,
    }
}

/// Formats seconds with three decimals.
#[must_use]
pub fn format_seconds(value: f64) -> String {
    format!("{value:.3}")
}
