use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use crate::{
    config::EngineConfig,
    service::{
        compute::compute,
        protocol::{Request, Response, StatKind},
        stats::Stats,
    },
};

/// Serves request lines from `reader` until `BYE` or end of stream.
///
/// Each non-blank line is answered with exactly one response line on
/// `writer`, suffixed with the time it took to handle, and recorded in
/// `stats`. Blank lines are ignored.
///
/// # Errors
/// Returns the first I/O error of either side.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use tuplecalc::{
///     config::EngineConfig,
///     service::{session::serve, stats::Stats},
/// };
///
/// let input = Cursor::new("COUNT_GRID;x:0:1:2;x\nSTAT_REQS\nBYE\nSTAT_REQS\n");
/// let mut output = Vec::new();
/// let stats = Stats::new();
///
/// serve(input, &mut output, &stats, &EngineConfig::default()).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// let lines: Vec<_> = output.lines().collect();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].starts_with("OK;3.0;"));
/// assert!(lines[1].starts_with("OK;1;"));
/// assert_eq!(stats.snapshot().requests, 2);
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn serve<R, W>(reader: R, mut writer: W, stats: &Stats, config: &EngineConfig) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let started = Instant::now();
        let Some(response) = handle_line(line, stats, config) else {
            tracing::debug!("quit requested");
            break;
        };
        let elapsed = started.elapsed();
        stats.record(elapsed);

        if let Response::Err(message) = &response {
            tracing::debug!(request = %line, error = %message, "request failed");
        }
        tracing::debug!(request = %line, elapsed_secs = elapsed.as_secs_f64(), "request served");

        writeln!(writer, "{}", response.render(elapsed))?;
        writer.flush()?;
    }

    Ok(())
}

/// Answers one request line; `None` means the client asked to quit.
///
/// # Example
/// ```
/// use tuplecalc::{
///     config::EngineConfig,
///     service::{protocol::Response, session::handle_line, stats::Stats},
/// };
///
/// let stats = Stats::new();
/// let config = EngineConfig::default();
///
/// assert_eq!(handle_line("MIN_GRID;x:0:1:2;x", &stats, &config),
///            Some(Response::Ok("0.0".to_string())));
/// assert_eq!(handle_line("MIN_GRID;x:0:1:2;z", &stats, &config),
///            Some(Response::Err("Variable not found: z".to_string())));
/// assert_eq!(handle_line("BYE", &stats, &config), None);
/// ```
#[must_use]
pub fn handle_line(line: &str, stats: &Stats, config: &EngineConfig) -> Option<Response> {
    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(e) => return Some(Response::Err(e.to_string())),
    };

    let response = match request {
        Request::Quit => return None,
        Request::Stat(kind) => {
            let snapshot = stats.snapshot();
            match kind {
                StatKind::Requests => Response::Ok(snapshot.requests.to_string()),
                StatKind::AvgTime => Response::seconds(snapshot.avg_time),
                StatKind::MaxTime => Response::seconds(snapshot.max_time),
            }
        },
        Request::Compute(request) => match compute(&request, config) {
            Ok(value) => Response::number(value),
            Err(e) => Response::Err(e.to_string()),
        },
    };

    Some(response)
}
