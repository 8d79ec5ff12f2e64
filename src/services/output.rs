use crate::domain::models::JsonOut;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Write one line per entry to `out_file` with the platform terminator,
/// or print them to stdout. Pipe-friendly in the stdout case.
pub fn export_lines(lines: &[String], out_file: Option<&Path>) -> anyhow::Result<()> {
    match out_file {
        Some(path) => {
            let mut body = String::new();
            for line in lines {
                body.push_str(line);
                body.push_str(LINE_TERMINATOR);
            }
            std::fs::write(path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            for line in lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}
