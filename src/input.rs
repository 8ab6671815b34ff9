//! Schedule files: one `P<number>,<burst>` line per process, in arrival order.

use crate::{error::InputError, scheduler::Ticks};
use anyhow::Context;
use std::{collections::HashSet, fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub number: u32,
    pub burst: Ticks,
}

pub fn parse_schedule(text: &str) -> Result<Vec<ProcessSpec>, InputError> {
    let mut specs = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.trim();
        if content.is_empty() {
            continue;
        }

        let (number, burst) = parse_line(content).ok_or_else(|| InputError::Malformed {
            line,
            content: content.to_owned(),
        })?;

        if number <= 0 {
            return Err(InputError::NonPositiveNumber { line });
        }
        let number = number as u32;
        if burst <= 0 {
            return Err(InputError::NonPositiveBurst { line, number });
        }
        if !seen.insert(number) {
            return Err(InputError::DuplicateProcess { line, number });
        }

        specs.push(ProcessSpec {
            number,
            burst: burst as Ticks,
        });
    }

    if specs.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(specs)
}

// Signed so that `P0,-3` is reported as a bad value rather than a bad line.
fn parse_line(content: &str) -> Option<(i64, i64)> {
    let (process, burst) = content.strip_prefix('P')?.split_once(',')?;
    let number = process.trim().parse().ok()?;
    let burst = burst.trim().parse().ok()?;
    if number > i64::from(u32::MAX) {
        return None;
    }
    Some((number, burst))
}

pub fn load_schedule(path: &Path) -> anyhow::Result<Vec<ProcessSpec>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("unable to open schedule file {}", path.display()))?;
    let specs = parse_schedule(&text)
        .with_context(|| format!("invalid schedule file {}", path.display()))?;
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_processes_in_order() {
        let specs = parse_schedule("P1,5\nP2,3\r\n\n  P3, 8  \n").unwrap();
        assert_eq!(
            specs,
            vec![
                ProcessSpec { number: 1, burst: 5 },
                ProcessSpec { number: 2, burst: 3 },
                ProcessSpec { number: 3, burst: 8 },
            ]
        );
    }

    #[test]
    fn rejects_empty_schedule() {
        assert_eq!(parse_schedule("\n  \n"), Err(InputError::Empty));
    }

    #[test]
    fn rejects_malformed_line() {
        assert_eq!(
            parse_schedule("P1,5\nfoo\n"),
            Err(InputError::Malformed {
                line: 2,
                content: "foo".to_owned()
            })
        );
        assert!(matches!(
            parse_schedule("P1;5"),
            Err(InputError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(
            parse_schedule("P1,0"),
            Err(InputError::NonPositiveBurst { line: 1, number: 1 })
        );
        assert_eq!(
            parse_schedule("P2,-4"),
            Err(InputError::NonPositiveBurst { line: 1, number: 2 })
        );
        assert_eq!(
            parse_schedule("P1,1\nP0,3"),
            Err(InputError::NonPositiveNumber { line: 2 })
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = std::env::temp_dir().join("cpu-sched-sim-no-such-schedule.csv");
        let err = load_schedule(&path).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("unable to open schedule file {}", path.display())
        );
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn invalid_file_contents_keep_the_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "cpu-sched-sim-invalid-{}.csv",
            std::process::id()
        ));
        fs::write(&path, "P1,5\nP1,3\n").unwrap();
        let err = load_schedule(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().starts_with("invalid schedule file "));
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::DuplicateProcess { line: 2, number: 1 })
        );
    }

    #[test]
    fn rejects_duplicate_process_numbers() {
        assert_eq!(
            parse_schedule("P1,2\nP2,2\nP1,4"),
            Err(InputError::DuplicateProcess { line: 3, number: 1 })
        );
    }
}
