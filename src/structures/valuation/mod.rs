/*!
Tri-state values, and assignments of values to variables.

A value is an optional boolean:
- `Some(true)` --- true.
- `Some(false)` --- false.
- `None` --- unknown.

Unknown is a first-class value rather than an absence: the satisfying
assignments of a formula may disagree on a variable, in which case the only
honest report for that variable is 'unknown'.

The canonical representation of an assignment is a vector of values whose
*i*th element is the value of the variable with index *i*:

```rust
# use trivalent::structures::valuation::{CValuation, Value};
let assignment: CValuation = vec![Some(true), None, Some(false)];

assert_eq!(assignment[0], Some(true));
assert_eq!(assignment[1], None);
```

Combination of values follows the (strong) Kleene truth tables, given by
[and], [or], and [not].
Material implication is derived from these during
[evaluation](crate::structures::expression::Expression::evaluate) and has no
combinator of its own.
*/

/// A tri-state truth value: `Some(true)`, `Some(false)`, or unknown (`None`).
pub type Value = Option<bool>;

/// The canonical representation of an assignment: one [Value] per variable
/// index.
pub type CValuation = Vec<Value>;

/// Kleene conjunction.
///
/// False absorbs, true is neutral, and unknown propagates otherwise.
pub fn and(left: Value, right: Value) -> Value {
    match (left, right) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), Some(true)) => Some(true),
        _ => None,
    }
}

/// Kleene disjunction.
///
/// True absorbs, false is neutral, and unknown propagates otherwise.
pub fn or(left: Value, right: Value) -> Value {
    match (left, right) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (Some(false), Some(false)) => Some(false),
        _ => None,
    }
}

/// Kleene negation.
///
/// Unknown negates to unknown.
pub fn not(value: Value) -> Value {
    value.map(|v| !v)
}

/// The (full) assignment encoded by a bit pattern: bit *i* of the pattern
/// gives the value of variable *i*, with a set bit read as true.
///
/// ```rust
/// # use trivalent::structures::valuation::from_bits;
/// assert_eq!(from_bits(0b101, 3), vec![Some(true), Some(false), Some(true)]);
/// ```
pub fn from_bits(pattern: usize, variable_count: usize) -> CValuation {
    (0..variable_count)
        .map(|bit| Some(pattern & (1 << bit) != 0))
        .collect()
}

/// The character used to display a value: `T`, `F`, or `?`.
pub fn symbol(value: Value) -> char {
    match value {
        Some(true) => 'T',
        Some(false) => 'F',
        None => '?',
    }
}
