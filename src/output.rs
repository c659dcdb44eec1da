//! Report rendering
//!
//! Writes the greeting and the sum line to any `Write` sink. The binary hands in a
//! locked stdout; tests hand in a `Vec<u8>`.

use crate::constants::{GREETING, LHS, RHS, SUM_PREFIX};
use crate::error::{AppError, Result};
use crate::math::add;
use std::io::Write;


/// The addition shown on the second line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub lhs: i32,
    pub rhs: i32,
    pub sum: i32,
}

impl Report {
    pub fn compute(lhs: i32, rhs: i32) -> Self {
        Self {
            lhs,
            rhs,
            sum: add(lhs, rhs),
        }
    }
}

/// Write the greeting line
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", GREETING).map_err(|e| AppError::output("greeting", e))
}

/// Write the sum line
pub fn write_sum<W: Write>(out: &mut W, sum: i32) -> Result<()> {
    writeln!(out, "{}{}", SUM_PREFIX, sum).map_err(|e| AppError::output("sum", e))
}

/// Write both report lines and flush the sink
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    write_greeting(out)?;
    write_sum(out, report.sum)?;
    out.flush().map_err(|e| AppError::output("report", e))
}

/// Compute `add(LHS, RHS)` and write the full report
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let report = Report::compute(LHS, RHS);
    tracing::debug!(
        "Computed {} + {} = {}",
        report.lhs,
        report.rhs,
        report.sum
    );

    write_report(out, &report)?;
    tracing::debug!("Report written");
    Ok(())
}
