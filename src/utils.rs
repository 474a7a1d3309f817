/// How the cells and rows of a table are glued together.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Layout<'a> {
    /// Placed between two cells of a row.
    pub column_delim: &'a str,
    /// Prefix of every row.
    pub before_row: Option<&'a str>,
    /// Line inserted between two consecutive rows.
    pub between_rows: Option<&'a str>,
    /// Pad each cell on the right to the width of its column.
    pub justify: bool,
}

/// Computes the width (in `char`s) of every column of `table`.
///
/// Rows shorter than the first one contribute nothing to the missing columns.
pub fn column_widths<S: AsRef<str>>(table: &[Vec<S>]) -> Vec<usize> {
    let n_cols = table.first().map_or(0, Vec::len);
    (0..n_cols)
        .map(|col| {
            table
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.as_ref().chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Lays out `table` as text, one line per row (plus separator lines).
///
/// There is no trailing newline.
pub fn table_to_string<S: AsRef<str>>(table: &[Vec<S>], layout: &Layout<'_>) -> String {
    let widths = column_widths(table);

    let rows: Vec<String> = table
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(j, cell)| {
                    let cell = cell.as_ref();
                    match widths.get(j) {
                        Some(&width) if layout.justify => format!("{:<width$}", cell, width = width),
                        _ => cell.to_string(),
                    }
                })
                .collect();
            format!("{}{}", layout.before_row.unwrap_or(""), cells.join(layout.column_delim))
        })
        .collect();

    match layout.between_rows {
        Some(line) => rows.join(format!("\n{}\n", line).as_str()),
        None => rows.join("\n"),
    }
}
