// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Column-aligned text tables for view rendering.

/// Render headers and rows as a column-aligned table.
///
/// Widths are computed per column from the longest cell, counted in
/// characters. Rows must have the same arity as the headers.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    push_row(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in rows {
        push_row(&mut out, row.iter().cloned(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&cell);
        let len = cell.chars().count();
        if len < widths[i] {
            line.push_str(&" ".repeat(widths[i] - len));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Format an optional numeric cell, dropping a trailing `.0`.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_align_to_longest_cell() {
        let rows = vec![
            vec!["1".to_string(), "Ana".to_string()],
            vec!["2".to_string(), "Benjamin".to_string()],
        ];
        let table = render_table(&["ID", "Name"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  --------");
        assert_eq!(lines[2], "1   Ana");
        assert_eq!(lines[3], "2   Benjamin");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(None), "N/A");
        assert_eq!(format_number(Some(30.0)), "30");
        assert_eq!(format_number(Some(5.5)), "5.5");
    }
}
