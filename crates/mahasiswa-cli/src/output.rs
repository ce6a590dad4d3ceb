//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use mahasiswa_core::Mahasiswa;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print every field of one record.
pub fn record(record: &Mahasiswa) {
    field("NIM", record.nim.as_str());
    field("Nama", &record.name);
    field("Alamat", &record.address);
    field("Jenis kelamin", &record.gender);
    field("Kelas", &record.class);
    field("Angkatan", &record.year);
}

const HEADERS: [&str; 6] = ["NIM", "Nama", "Alamat", "JK", "Kelas", "Angkatan"];

fn columns(record: &Mahasiswa) -> [&str; 6] {
    [
        record.nim.as_str(),
        &record.name,
        &record.address,
        &record.gender,
        &record.class,
        &record.year,
    ]
}

/// Render records as an aligned table, one per line.
pub fn table(records: &[Mahasiswa]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for record in records {
        for (width, cell) in widths.iter_mut().zip(columns(record)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let row = |cells: [&str; 6]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![row(HEADERS)];
    lines.extend(records.iter().map(|r| row(columns(r))));
    lines.join("\n")
}

/// Print records as a table, or a notice when there are none.
pub fn records(records: &[Mahasiswa]) {
    if records.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
        return;
    }

    let rendered = table(records);
    let mut lines = rendered.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
}
