//! # truth-tables: truth tables for propositional logic
//!
//! **`truth-tables`** parses propositional-logic statements written with
//! textual operator macros, evaluates them over every assignment of their free
//! variables, and renders the result as a truth table, either as aligned plain
//! text or as LaTeX `tabular` source.
//!
//! ## Syntax
//!
//! | Connective  | Macros           | Glyph | LaTeX              |
//! |-------------|------------------|-------|--------------------|
//! | negation    | `not`            | `¬`   | `\lnot`            |
//! | conjunction | `and`            | `∧`   | `\land`            |
//! | disjunction | `or`             | `∨`   | `\lor`             |
//! | implication | `impl`, `=>`     | `⇒`   | `\Rightarrow`      |
//! | equivalence | `eq`, `<=>`      | `⇔`   | `\Leftrightarrow`  |
//!
//! The table is ordered from tightest to loosest binding. Variables are single
//! uppercase letters. Every token except parentheses must be separated by
//! spaces. Implication and equivalence have **no** relative precedence, so
//! `A => B <=> C` is rejected; write `(A => B) <=> C` instead.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_tables::format::{Formatter, FormatterConfig, Formatting};
//! use truth_tables::statement::Statement;
//!
//! // 1. Parse the statements (fails fast on malformed input)
//! let statements = vec![
//!     Statement::parse("not A or B").unwrap(),
//!     Statement::parse("A => B").unwrap(),
//! ];
//!
//! // 2. Render the table
//! let config = FormatterConfig {
//!     mode: Formatting::Human,
//!     ..FormatterConfig::default()
//! };
//! let table = Formatter::new(&statements, config).format_table();
//!
//! assert_eq!(table.lines().next(), Some("A   B   ¬A ∨ B   A ⇒ B"));
//! assert_eq!(table.lines().count(), 1 + 4);
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: tokenizer and parenthesis unwrapping.
//! - **[`statement`]**: the expression tree and its precedence-based parser.
//! - **[`eval`]**: evaluation of a statement under an [`Assignment`][crate::types::Assignment].
//! - **[`format`]**: table generation and rendering.

pub mod error;
pub mod eval;
pub mod format;
pub mod operator;
pub mod statement;
pub mod token;
pub mod types;
pub mod utils;
