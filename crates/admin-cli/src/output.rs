//! Plain-text table rendering and operator confirmation prompts.

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Left-aligned column table with a header row. Widths come from the widest
/// cell in each column.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));
    let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    println!("{}", "-".repeat(rule));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(0);
                format!("{:<width$}", cell, width = width)
            })
            .collect();
        println!("{}", line.join("  "));
    }
}

pub fn print_pagination(page: i64, pages: i64, total: i64) {
    println!();
    println!("Page {page} of {pages} ({total} total)");
}

/// y/N prompt. Anything other than `y`/`yes` declines.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Prompt for a line of input, trimmed.
pub fn prompt_line(question: &str) -> Result<String> {
    print!("{question}: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap() in tests for cleaner test code
mod tests {
    use super::*;

    #[test]
    fn test_print_table_handles_ragged_rows() {
        // Must not panic when a row has fewer cells than the header.
        print_table(
            &["A", "B"],
            &[vec!["1".to_string()], vec!["2".to_string(), "3".to_string()]],
        );
    }
}
