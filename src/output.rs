// src/output.rs
use crate::path::SlePath;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write the trace as `index,x,y,time,brownian` rows.
///
/// Row 0 is the origin and has empty increment columns; row `i + 1` carries the
/// increment that produced it.
pub fn write_trace_to_csv(filename: &str, path: &SlePath) -> io::Result<()> {
    let file = File::create(filename)?;
    write_trace(BufWriter::new(file), path)
}

pub fn write_trace<W: Write>(mut out: W, path: &SlePath) -> io::Result<()> {
    writeln!(out, "index,x,y,time,brownian")?;
    let origin = path.trace()[0];
    writeln!(out, "0,{},{},,", origin.re, origin.im)?;
    for (i, (z, inc)) in path.trace()[1..]
        .iter()
        .zip(path.increments())
        .enumerate()
    {
        writeln!(out, "{},{},{},{},{}", i + 1, z.re, z.im, inc.time, inc.brownian)?;
    }
    out.flush()
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(String, String)]) -> io::Result<()> {
    let file = File::create(filename)?;
    write_summary(BufWriter::new(file), summary_data)
}

pub fn write_summary<W: Write>(mut out: W, summary_data: &[(String, String)]) -> io::Result<()> {
    writeln!(out, "key,value")?;
    for (key, value) in summary_data {
        writeln!(out, "{},{}", key, value)?;
    }
    out.flush()
}
