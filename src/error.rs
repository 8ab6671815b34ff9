use std::{error::Error, fmt};

use crate::scheduler::Ticks;

/// A schedule that cannot be simulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    Malformed { line: usize, content: String },
    NonPositiveBurst { line: usize, number: u32 },
    NonPositiveNumber { line: usize },
    DuplicateProcess { line: usize, number: u32 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "schedule contains no processes"),
            Self::Malformed { line, content } => {
                write!(f, "line {line}: expected `P<number>,<burst>`, got {content:?}")
            }
            Self::NonPositiveBurst { line, number } => {
                write!(f, "line {line}: process P{number} has a non-positive burst time")
            }
            Self::NonPositiveNumber { line } => {
                write!(f, "line {line}: process numbers must be positive")
            }
            Self::DuplicateProcess { line, number } => {
                write!(f, "line {line}: process P{number} is listed more than once")
            }
        }
    }
}

impl Error for InputError {}

/// A scheduling decision that broke the simulation's invariants.
///
/// These point at a defect in a selector, never at bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    IndexOutOfRange { index: usize, len: usize },
    FinishedProcess { number: u32, time: Ticks },
    NotArrived { number: u32, time: Ticks },
    NoEligibleProcess { time: Ticks },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "selected index {index} but the table holds {len} processes")
            }
            Self::FinishedProcess { number, time } => {
                write!(f, "T{time}: selected P{number}, which has already finished")
            }
            Self::NotArrived { number, time } => {
                write!(f, "T{time}: selected P{number}, which has not arrived yet")
            }
            Self::NoEligibleProcess { time } => {
                write!(f, "T{time}: no process is eligible to run but the schedule is unfinished")
            }
        }
    }
}

impl Error for SimError {}
