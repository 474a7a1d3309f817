//! Splitting expressions into tokens and stripping redundant parentheses.
//!
//! Tokens are borrowed slices of the input. Spaces separate tokens and are
//! dropped; each parenthesis is a token of its own. Everything else is
//! accumulated verbatim, so operator macros such as `<=>` or `impl` must be
//! delimited by spaces or parentheses to be recognized.

pub const OPEN: &str = "(";
pub const CLOSE: &str = ")";

/// Splits `expression` into tokens.
///
/// ```
/// use truth_tables::token::tokenize;
///
/// assert_eq!(tokenize("not (A or B)"), ["not", "(", "A", "or", "B", ")"]);
/// ```
pub fn tokenize(expression: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in expression.char_indices() {
        match c {
            ' ' | '(' | ')' => {
                if let Some(s) = start.take() {
                    tokens.push(&expression[s..i]);
                }
                if c != ' ' {
                    tokens.push(&expression[i..i + 1]);
                }
            }
            _ => {
                if start.is_none() {
                    start = Some(i);
                }
            }
        }
    }
    if let Some(s) = start {
        tokens.push(&expression[s..]);
    }

    tokens
}

/// Nesting depth recorded for every parenthesis token, in order.
///
/// An opening parenthesis records the depth before entering, a closing one
/// the depth after leaving, so a matching pair records the same value.
fn paren_depths<T: AsRef<str>>(tokens: &[T]) -> Vec<i32> {
    let mut depths = Vec::new();
    let mut level = 0;
    for token in tokens {
        match token.as_ref() {
            OPEN => {
                depths.push(level);
                level += 1;
            }
            CLOSE => {
                level -= 1;
                depths.push(level);
            }
            _ => {}
        }
    }
    depths
}

/// Returns true if every `)` closes an earlier `(` and none is left open.
pub fn is_balanced<T: AsRef<str>>(tokens: &[T]) -> bool {
    let mut level = 0i32;
    for token in tokens {
        match token.as_ref() {
            OPEN => level += 1,
            CLOSE => {
                level -= 1;
                if level < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    level == 0
}

/// Strips outer parenthesis pairs that enclose the whole token span.
///
/// `( ( A and B ) )` becomes `A and B`, while `( A ) and ( B )` is left
/// untouched because its first parenthesis closes before the end. The result
/// is a subslice of `tokens`; empty input is returned as is.
pub fn unwrap_parentheses<T: AsRef<str>>(tokens: &[T]) -> &[T] {
    let depths = paren_depths(tokens);

    let (mut lo, mut hi) = (0, tokens.len());
    let (mut depth_lo, mut depth_hi) = (0, depths.len());

    while hi - lo >= 2 && tokens[lo].as_ref() == OPEN && tokens[hi - 1].as_ref() == CLOSE {
        let outer = depths[depth_lo];
        if depths[depth_lo + 1..depth_hi - 1].contains(&outer) {
            break;
        }
        lo += 1;
        hi -= 1;
        depth_lo += 1;
        depth_hi -= 1;
    }

    &tokens[lo..hi]
}
