/*!
 * Workload Loader
 * Parses the quantum-then-quadruples text format
 *
 * The first integer is the round-robin quantum. Every following group of
 * four integers is `pid arrival burst priority`. Tokens are whitespace
 * separated and may be laid out over lines freely; `#` starts a comment.
 */

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::process::{validate_batch, Batch, ProcessRecord};
use std::path::Path;
use tracing::{info, warn};

/// Fields per process entry
const FIELDS_PER_PROCESS: usize = 4;

/// A loaded workload: quantum plus processes in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub quantum: i64,
    pub batch: Batch,
}

/// Read and parse a workload file
pub fn load_workload(path: impl AsRef<Path>) -> SimResult<Workload> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| SimError::Io(format!("{}: {}", path.display(), e)))?;

    let workload = parse_workload(&text)?;
    info!(
        path = %path.display(),
        processes = workload.batch.len(),
        quantum = workload.quantum,
        "workload loaded"
    );
    Ok(workload)
}

/// Parse workload text
pub fn parse_workload(input: &str) -> SimResult<Workload> {
    let mut tokens = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let content = line.split('#').next().unwrap_or("");
        for token in content.split_whitespace() {
            let value = token.parse::<i64>().map_err(|_| SimError::Parse {
                line: index + 1,
                message: format!("expected integer, found `{}`", token),
            })?;
            tokens.push((index + 1, value));
        }
    }

    let mut values = tokens.into_iter();
    let Some((_, quantum)) = values.next() else {
        return Err(SimError::Parse {
            line: 1,
            message: "missing quantum".to_string(),
        });
    };

    let rest: Vec<(usize, i64)> = values.collect();
    let mut chunks = rest.chunks_exact(FIELDS_PER_PROCESS);
    let mut batch = Batch::default();
    for chunk in &mut chunks {
        batch.push(ProcessRecord::from_raw(
            chunk[0].1, chunk[1].1, chunk[2].1, chunk[3].1,
        )?);
    }

    if let Some((line, _)) = chunks.remainder().first() {
        warn!(
            line,
            values = chunks.remainder().len(),
            "ignoring incomplete trailing process entry"
        );
    }

    validate_batch(&batch)?;
    Ok(Workload { quantum, batch })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let workload = parse_workload("3\n1 0 5 2\n2 1 3 1\n").unwrap();
        assert_eq!(workload.quantum, 3);
        assert_eq!(workload.batch.ids(), vec![1, 2]);
        assert_eq!(workload.batch[0].burst, 5);
        assert_eq!(workload.batch[1].arrival, 1);
        assert_eq!(workload.batch[1].priority, 1);
    }

    #[test]
    fn test_free_layout_and_comments() {
        let workload = parse_workload("# quantum\n2 1 0\n5 2 # first process\n2 1 3 1").unwrap();
        assert_eq!(workload.batch.len(), 2);
        assert_eq!(workload.batch[0].priority, 2);
    }

    #[test]
    fn test_trailing_incomplete_entry_ignored() {
        let workload = parse_workload("2\n1 0 5 2\n2 1").unwrap();
        assert_eq!(workload.batch.len(), 1);
    }

    #[test]
    fn test_non_integer_reports_line() {
        let err = parse_workload("2\n1 0 5 2\n2 x 3 1\n").unwrap_err();
        assert_eq!(
            err,
            SimError::Parse {
                line: 3,
                message: "expected integer, found `x`".to_string()
            }
        );
    }

    #[test]
    fn test_missing_quantum() {
        assert!(matches!(
            parse_workload("   \n"),
            Err(SimError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_no_processes_is_invalid() {
        assert!(matches!(
            parse_workload("4\n"),
            Err(SimError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_negative_arrival_rejected() {
        assert!(matches!(
            parse_workload("4\n1 -2 5 0\n"),
            Err(SimError::InvalidWorkload(_))
        ));
    }
}
