//! Error types for BDE series and solver operations

use thiserror::Error;

/// Errors raised by series operations and the delay solver.
///
/// Every failure surfaces as exactly one kind, carrying enough context
/// (variable index, time, offending value) to diagnose without a debugger.
/// Errors abort the current operation; nothing is retried inside the core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BdeError {
    // Series construction errors
    #[error("series shape invalid: {t_len} switch times vs {y_len} states")]
    InvalidSeriesShape { t_len: usize, y_len: usize },

    #[error("switch times not strictly increasing at index {index}: {prev} then {next}")]
    TimesNotSorted { index: usize, prev: f64, next: f64 },

    #[error("series end {end} is before the last switch time {last_switch}")]
    EndBeforeLastSwitch { end: f64, last_switch: f64 },

    // Series query errors
    #[error("time {t} outside series domain [{start}, {end}]")]
    OutOfRange { t: f64, start: f64, end: f64 },

    #[error("series domains differ: [{start_a}, {end_a}] vs [{start_b}, {end_b}]")]
    DomainMismatch {
        start_a: f64,
        end_a: f64,
        start_b: f64,
        end_b: f64,
    },

    // Solver construction errors
    #[error("delay {index} is not strictly positive: {delay}")]
    InvalidDelay { index: usize, delay: f64 },

    #[error("history {variable} spans {span} but the maximum delay is {max_delay}")]
    HistoryTooShort {
        variable: usize,
        span: f64,
        max_delay: f64,
    },

    #[error("history {variable} ends on a switch at {switch_time}")]
    HistoryEndsOnSwitch { variable: usize, switch_time: f64 },

    // Solve errors
    #[error(
        "forcing input {input} covers [{start}, {end}] but [{required_start}, {required_end}] is required"
    )]
    ForcingTooShort {
        input: usize,
        start: f64,
        end: f64,
        required_start: f64,
        required_end: f64,
    },

    #[error("end time {end_time} is not after the simulation start {start_time}")]
    EndBeforeStart { start_time: f64, end_time: f64 },

    #[error("transition returned {actual} states for {expected} variables")]
    TransitionArityMismatch { expected: usize, actual: usize },

    #[error(
        "variable {variable} reached {max_switches} switches by t={time}: the model is chattering"
    )]
    SwitchDensityExceeded {
        variable: usize,
        time: f64,
        max_switches: usize,
    },
}

/// Result type for BDE operations
pub type BdeResult<T> = Result<T, BdeError>;
