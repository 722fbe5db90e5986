use serde::Serialize;
use std::{io, iter};

/// Print rows in a table
pub fn print_table<const N: usize>(header: [&str; N], rows: &[[String; N]]) {
    // For each column, find the largest width of any cell
    let mut widths = [0; N];
    for column in 0..N {
        widths[column] = iter::once(header[column].len())
            .chain(rows.iter().map(|row| row[column].len()))
            .max()
            .unwrap_or_default()
            + 1; // Min width, for spacing
    }

    for (header, width) in header.into_iter().zip(widths.iter()) {
        print!("{header:<width$}");
    }
    println!();
    for row in rows {
        for (cell, width) in row.iter().zip(widths) {
            print!("{cell:<width$}");
        }
        println!();
    }
}

/// Serialize data to YAML and print it
///
/// ## Errors
///
/// Error if serialization fails or writing to stdout fails
pub fn print_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    serde_yaml::to_writer(io::stdout(), value).map_err(anyhow::Error::from)
}

/// Serialize data to JSON and print it, followed by a newline
///
/// ## Errors
///
/// Error if serialization fails or writing to stdout fails
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(io::stdout(), value)?;
    } else {
        serde_json::to_writer(io::stdout(), value)?;
    }
    println!();
    Ok(())
}
