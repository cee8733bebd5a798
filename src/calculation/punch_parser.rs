//! Punch log parsing.
//!
//! Each log line is expected to look like
//! `<employeeId> <YYYY-MM-DD> <HH:MM:SS> [ignored trailing tokens]`.
//! Parsing is best-effort: a bad line is skipped and never aborts the run.

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::models::{
    AttendanceIndex, EmployeeId, ParseDiagnostic, ParseStats, PunchEvent, Roster,
};

/// Combined date and time format of a punch.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The outcome of parsing a single log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Fewer than three tokens; not attendance content.
    Ignored,
    /// Three or more tokens, but the id or the timestamp did not parse.
    Malformed {
        /// Why the line was rejected.
        reason: String,
    },
    /// A well-formed punch.
    Punch(PunchEvent),
}

/// Parses one raw log line.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{LineOutcome, parse_punch_line};
///
/// assert_eq!(parse_punch_line(""), LineOutcome::Ignored);
/// assert!(matches!(parse_punch_line("1 2024-03-05 09:00:00 0 1"), LineOutcome::Punch(_)));
/// assert!(matches!(parse_punch_line("x 2024-03-05 09:00:00"), LineOutcome::Malformed { .. }));
/// ```
pub fn parse_punch_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return LineOutcome::Ignored;
    }

    let employee_id: EmployeeId = match tokens[0].parse() {
        Ok(id) => id,
        Err(_) => {
            return LineOutcome::Malformed {
                reason: format!("employee id '{}' is not an integer", tokens[0]),
            };
        }
    };

    let stamp = format!("{} {}", tokens[1], tokens[2]);
    match NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT) {
        Ok(timestamp) => LineOutcome::Punch(PunchEvent {
            employee_id,
            timestamp,
        }),
        Err(e) => LineOutcome::Malformed {
            reason: format!("timestamp '{}' is invalid: {}", stamp, e),
        },
    }
}

/// The result of parsing a whole punch log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLog {
    /// Punches of rostered employees, grouped by day.
    pub index: AttendanceIndex,
    /// One entry per malformed line, in input order.
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Summary counters for the run.
    pub stats: ParseStats,
}

/// Parses raw log lines into an [`AttendanceIndex`].
///
/// Unknown employee ids are dropped silently. Malformed lines produce a
/// [`ParseDiagnostic`] and a warning log entry.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_punch_log;
/// use attendance_engine::models::{Employee, Roster};
///
/// let roster = Roster::new(vec![Employee::new("Eve", 1)])?;
/// let lines = ["1 2024-03-05 09:00:00", "abc not-a-date", "1 bad 09:00:00", "99 2024-03-05 09:00:00"];
/// let parsed = parse_punch_log(&lines, &roster);
///
/// assert_eq!(parsed.index.punches(1, 5).len(), 1);
/// assert_eq!(parsed.diagnostics.len(), 1);
/// assert_eq!(parsed.stats.unknown_employee, 1);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn parse_punch_log<S: AsRef<str>>(lines: &[S], roster: &Roster) -> ParsedLog {
    let mut index = AttendanceIndex::for_roster(roster);
    let mut diagnostics = Vec::new();
    let mut stats = ParseStats::default();

    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim_end_matches(['\r', '\n']);
        match parse_punch_line(line) {
            LineOutcome::Ignored => stats.ignored += 1,
            LineOutcome::Malformed { reason } => {
                warn!(line_number = idx + 1, line = %line, %reason, "Skipping malformed line");
                stats.malformed += 1;
                diagnostics.push(ParseDiagnostic {
                    line_number: idx + 1,
                    line: line.to_string(),
                    reason,
                });
            }
            LineOutcome::Punch(punch) => {
                if index.record(punch) {
                    stats.accepted += 1;
                } else {
                    debug!(employee_id = punch.employee_id, "Ignoring punch for unrostered id");
                    stats.unknown_employee += 1;
                }
            }
        }
    }

    info!(
        accepted = stats.accepted,
        unknown_employee = stats.unknown_employee,
        ignored = stats.ignored,
        malformed = stats.malformed,
        "Punch log parsed"
    );

    ParsedLog {
        index,
        diagnostics,
        stats,
    }
}
