//! Type-safe wrappers for propositional variables and their valuations.
//!
//! Variable names are single uppercase ASCII letters, so a [`VarSet`] and an
//! [`Assignment`] both fit into a handful of bits. Iterating a [`VarSet`]
//! always yields variables in lexicographic order, which is the order used
//! for table columns and for bit significance when enumerating assignments.
use std::fmt;

/// Number of distinct variable names (`A` through `Z`).
pub const NUM_VARS: usize = 26;

/// A propositional variable, named by a single uppercase letter.
///
/// # Invariants
///
/// - The wrapped byte is always in `b'A'..=b'Z'`
/// - Ordering matches the lexicographic order of the names
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// Creates a variable from its name letter.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an ASCII uppercase letter.
    pub fn new(name: char) -> Self {
        assert!(name.is_ascii_uppercase(), "Variable names must be in A..=Z, got {:?}", name);
        Var(name as u8)
    }

    /// Parses a token as a variable name.
    ///
    /// Only a token consisting of exactly one uppercase letter is a variable.
    pub fn parse(token: &str) -> Option<Self> {
        match token.as_bytes() {
            &[b] if b.is_ascii_uppercase() => Some(Var(b)),
            _ => None,
        }
    }

    /// Returns the name letter.
    pub fn name(self) -> char {
        self.0 as char
    }

    /// Returns the position of the variable in the alphabet (`A` is 0).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_VARS);
        Var(b'A' + index as u8)
    }

    fn mask(self) -> u32 {
        1 << self.index()
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.name()
    }
}

/// An ordered set of variables.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VarSet(u32);

impl VarSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        VarSet(0)
    }

    /// Creates the set containing only `var`.
    pub fn singleton(var: Var) -> Self {
        VarSet(var.mask())
    }

    /// Returns the number of variables in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no variables.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if `var` is in the set.
    pub fn contains(&self, var: Var) -> bool {
        self.0 & var.mask() != 0
    }

    /// Adds `var` to the set. Returns true if it was not already present.
    pub fn insert(&mut self, var: Var) -> bool {
        let was_absent = !self.contains(var);
        self.0 |= var.mask();
        was_absent
    }

    /// Returns the union of two sets.
    pub fn union(self, other: VarSet) -> VarSet {
        VarSet(self.0 | other.0)
    }

    /// Iterates over the variables in lexicographic order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Var> + '_ {
        (0..NUM_VARS)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(Var::from_index)
    }

    /// Collects the variables into a sorted vector.
    pub fn to_vec(&self) -> Vec<Var> {
        self.iter().collect()
    }
}

impl FromIterator<Var> for VarSet {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        let mut set = VarSet::new();
        for var in iter {
            set.insert(var);
        }
        set
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, var) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "}}")
    }
}

/// A valuation of variables, mapping each bound variable to a boolean.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    bound: u32,
    values: u32,
}

impl Assignment {
    /// Creates an empty assignment (no variable bound).
    pub const fn new() -> Self {
        Assignment { bound: 0, values: 0 }
    }

    /// Decodes the `index`-th row of a truth table over `vars`.
    ///
    /// The last variable of `vars` is bit 0 of `index`, the first one is
    /// bit `n - 1`, so the first variable is the most significant.
    pub fn from_index(vars: &[Var], index: u64) -> Self {
        let mut assignment = Assignment::new();
        for (j, &var) in vars.iter().rev().enumerate() {
            assignment.set(var, (index >> j) & 1 == 1);
        }
        assignment
    }

    /// Returns the value of `var`, or `None` if it is unbound.
    pub fn get(&self, var: Var) -> Option<bool> {
        if self.bound & var.mask() == 0 {
            None
        } else {
            Some(self.values & var.mask() != 0)
        }
    }

    /// Binds `var` to `value`, overwriting any previous binding.
    pub fn set(&mut self, var: Var, value: bool) {
        self.bound |= var.mask();
        if value {
            self.values |= var.mask();
        } else {
            self.values &= !var.mask();
        }
    }

    /// Returns the set of bound variables.
    pub fn domain(&self) -> VarSet {
        VarSet(self.bound)
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.set(var, value);
        }
        assignment
    }
}
