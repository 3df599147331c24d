//! Tabular text output

use std::io::{self, Write};

use bde_core::{BooleanSeries, Tolerance};

/// Write a merged multi-series as one line per interval:
///
/// ```text
///     0.0000  ->      1.0000 : T F
///     1.0000  ->      2.5000 : F F
/// ```
///
/// `t` and `y` are the shared grid from [`BooleanSeries::merge`]; the last
/// interval closes at `end`. Diagnostic output for humans, not a stable
/// format.
pub fn print_tabular<W: Write>(
    t: &[f64],
    y: &[Vec<bool>],
    end: f64,
    out: &mut W,
) -> io::Result<()> {
    for (i, &from) in t.iter().enumerate() {
        let to = t.get(i + 1).copied().unwrap_or(end);
        write!(out, "  {:>10.4}  ->  {:>10.4} :", from, to)?;
        for &state in &y[i] {
            write!(out, " {}", if state { 'T' } else { 'F' })?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Merge a series list and print it in one call.
pub fn print_series<W: Write>(
    list: &[BooleanSeries],
    tol: Tolerance,
    out: &mut W,
) -> io::Result<()> {
    let (t, y) = BooleanSeries::merge(list, tol)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let end = list.first().map(|s| s.end()).unwrap_or(0.0);
    print_tabular(&t, &y, end, out)
}
