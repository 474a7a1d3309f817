//! Truth table rendering.
//!
//! A [`Formatter`] takes a list of statements, collects their free variables
//! in lexicographic order, evaluates every statement under each of the `2^n`
//! assignments and lays out the result either as aligned plain text
//! ([`Formatting::Human`]) or as a LaTeX `tabular` ([`Formatting::Latex`]).
//!
//! # Examples
//!
//! ```
//! use truth_tables::format::{Formatter, FormatterConfig};
//! use truth_tables::statement::Statement;
//!
//! let statements = vec![Statement::parse("A and B").unwrap()];
//! let table = Formatter::new(&statements, FormatterConfig::default()).format_table();
//! assert_eq!(table.lines().next(), Some("A   B   A ∧ B"));
//! assert_eq!(table.lines().count(), 5);
//! ```

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::eval::Eval;
use crate::operator::Operator;
use crate::statement::Statement;
use crate::types::{Assignment, Var, VarSet};
use crate::utils::{table_to_string, Layout};

const HUMAN_COLUMN_DELIM: &str = "   ";

const LATEX_TABLE_EPILOGUE: &str = "\\end{tabular}";
const LATEX_COLUMN_DELIM: &str = " & ";
const LATEX_INDENT: &str = "    ";
const LATEX_HLINE: &str = "     \\\\ \\hline";
const LATEX_WRAP_CHAR: char = '$';

/// Output style of a table.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Formatting {
    /// Plain text with logic glyphs, columns padded to equal width.
    #[default]
    Human,
    /// LaTeX `tabular` source with math-mode cells.
    Latex,
}

impl Formatting {
    /// Symbol substituted for `op` in headers.
    pub fn symbol(self, op: Operator) -> &'static str {
        match self {
            Formatting::Human => op.glyph(),
            Formatting::Latex => op.latex(),
        }
    }

    /// Wraps a cell in the mode's math delimiters, if any.
    pub fn wrap(self, cell: &str) -> String {
        match self {
            Formatting::Human => cell.to_string(),
            Formatting::Latex => format!("{0}{1}{0}", LATEX_WRAP_CHAR, cell),
        }
    }

    fn layout(self) -> Layout<'static> {
        match self {
            Formatting::Human => Layout {
                column_delim: HUMAN_COLUMN_DELIM,
                before_row: None,
                between_rows: None,
                justify: true,
            },
            Formatting::Latex => Layout {
                column_delim: LATEX_COLUMN_DELIM,
                before_row: Some(LATEX_INDENT),
                between_rows: Some(LATEX_HLINE),
                justify: false,
            },
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Malformed bool format: '{0}'")]
pub struct BoolFormatError(pub String);

/// Labels used to display boolean values.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BoolFormat {
    pub false_label: String,
    pub true_label: String,
}

impl BoolFormat {
    pub fn new(false_label: impl Into<String>, true_label: impl Into<String>) -> Self {
        Self {
            false_label: false_label.into(),
            true_label: true_label.into(),
        }
    }

    pub fn label(&self, value: bool) -> &str {
        if value {
            &self.true_label
        } else {
            &self.false_label
        }
    }
}

impl Default for BoolFormat {
    fn default() -> Self {
        Self::new("F", "T")
    }
}

impl FromStr for BoolFormat {
    type Err = BoolFormatError;

    /// Parses `<false>,<true>`, e.g. `0,1`. Anything after a second comma is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        match (parts.next(), parts.next()) {
            (Some(false_label), Some(true_label)) => Ok(Self::new(false_label, true_label)),
            _ => Err(BoolFormatError(s.to_string())),
        }
    }
}

/// Configuration options for table rendering.
///
/// Use `FormatterConfig::default()` for human-readable output with `T`/`F`
/// labels, rows in ascending order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FormatterConfig {
    /// Output style (default: human).
    pub mode: Formatting,
    /// Labels for boolean cells (default: `F`/`T`).
    pub bool_format: BoolFormat,
    /// Enumerate assignments from all-true down to all-false (default: false).
    pub reverse: bool,
}

/// Renders a truth table for a list of statements.
#[derive(Debug, Clone)]
pub struct Formatter<'a> {
    statements: &'a [Statement],
    config: FormatterConfig,
    variables: Vec<Var>,
}

impl<'a> Formatter<'a> {
    pub fn new(statements: &'a [Statement], config: FormatterConfig) -> Self {
        let variables = statements
            .iter()
            .fold(VarSet::new(), |acc, s| acc.union(s.variables()))
            .to_vec();
        Self {
            statements,
            config,
            variables,
        }
    }

    /// Free variables of all statements, in column order.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Number of body rows, `2^n` for `n` free variables.
    pub fn row_count(&self) -> u64 {
        1 << self.variables.len()
    }

    /// Builds the table as a grid of cells: the header row followed by one
    /// row per assignment.
    ///
    /// The leading columns are the variables themselves, then one column per
    /// statement.
    pub fn cells(&self) -> Vec<Vec<String>> {
        let mode = self.config.mode;
        let var_columns: Vec<Statement> = self.variables.iter().map(|&v| Statement::variable(v)).collect();
        let columns: Vec<&Statement> = var_columns.iter().chain(self.statements).collect();

        let rows = self.row_count();
        debug!(
            "format_table: {} variables, {} columns, {} rows",
            self.variables.len(),
            columns.len(),
            rows
        );

        let mut table = Vec::with_capacity(rows as usize + 1);
        table.push(columns.iter().map(|s| mode.wrap(&s.format(mode))).collect());

        for k in 0..rows {
            let index = if self.config.reverse { rows - 1 - k } else { k };
            let assignment = Assignment::from_index(&self.variables, index);
            let row = columns
                .iter()
                .map(|s| {
                    let value = s
                        .eval(&assignment)
                        .expect("assignment binds every free variable of the table");
                    mode.wrap(self.config.bool_format.label(value))
                })
                .collect();
            table.push(row);
        }

        table
    }

    /// Renders the whole table.
    pub fn format_table(&self) -> String {
        let mode = self.config.mode;
        let table = self.cells();
        let body = table_to_string(&table, &mode.layout());

        match mode {
            Formatting::Human => body,
            Formatting::Latex => {
                let n_cols = table.first().map_or(0, Vec::len);
                let columns = vec!["c"; n_cols].join("|");
                format!(
                    "\\begin{{tabular}}{{ {} }}\n{}\n{}",
                    columns, body, LATEX_TABLE_EPILOGUE
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn parse_all(inputs: &[&str]) -> Vec<Statement> {
        inputs.iter().map(|s| Statement::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_variables_sorted_union() {
        let statements = parse_all(&["C or A", "B and A"]);
        let f = Formatter::new(&statements, FormatterConfig::default());
        assert_eq!(f.variables(), &[Var::new('A'), Var::new('B'), Var::new('C')]);
        assert_eq!(f.row_count(), 8);
    }

    #[test]
    fn test_human_table() {
        let statements = parse_all(&["not A or B"]);
        let table = Formatter::new(&statements, FormatterConfig::default()).format_table();
        let expected = [
            "A   B   ¬A ∨ B",
            "F   F   T     ",
            "F   T   T     ",
            "T   F   F     ",
            "T   T   T     ",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_reverse_order() {
        let statements = parse_all(&["A and B"]);
        let config = FormatterConfig {
            reverse: true,
            ..FormatterConfig::default()
        };
        let cells = Formatter::new(&statements, config).cells();
        assert_eq!(cells[1], vec!["T", "T", "T"]);
        assert_eq!(cells[4], vec!["F", "F", "F"]);
    }

    #[test]
    fn test_custom_labels() {
        let statements = parse_all(&["A"]);
        let config = FormatterConfig {
            bool_format: BoolFormat::new("false", "true"),
            ..FormatterConfig::default()
        };
        let table = Formatter::new(&statements, config).format_table();
        assert_eq!(table, "A       A    \nfalse   false\ntrue    true ");
    }

    #[test]
    fn test_no_variables() {
        let statements: Vec<Statement> = vec![];
        let f = Formatter::new(&statements, FormatterConfig::default());
        assert_eq!(f.row_count(), 1);
        assert_eq!(f.cells().len(), 2);
    }

    #[test]
    fn test_latex_table() {
        let statements = parse_all(&["A and B"]);
        let config = FormatterConfig {
            mode: Formatting::Latex,
            ..FormatterConfig::default()
        };
        let table = Formatter::new(&statements, config).format_table();
        let expected = [
            "\\begin{tabular}{ c|c|c }",
            "    $A$ & $B$ & $A \\land B$",
            "     \\\\ \\hline",
            "    $F$ & $F$ & $F$",
            "     \\\\ \\hline",
            "    $F$ & $T$ & $F$",
            "     \\\\ \\hline",
            "    $T$ & $F$ & $F$",
            "     \\\\ \\hline",
            "    $T$ & $T$ & $T$",
            "\\end{tabular}",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_bool_format_from_str() {
        assert_eq!("0,1".parse::<BoolFormat>().unwrap(), BoolFormat::new("0", "1"));
        assert_eq!("no,yes,maybe".parse::<BoolFormat>().unwrap(), BoolFormat::new("no", "yes"));
        assert_eq!(",".parse::<BoolFormat>().unwrap(), BoolFormat::new("", ""));
        assert_eq!(
            "01".parse::<BoolFormat>().unwrap_err(),
            BoolFormatError("01".to_string())
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Formatting::Human.symbol(Operator::Implies), "⇒");
        assert_eq!(Formatting::Latex.symbol(Operator::Or), "\\lor");
        assert_eq!(Formatting::Latex.wrap("x"), "$x$");
        assert_eq!(Formatting::Human.wrap("x"), "x");
    }
}
