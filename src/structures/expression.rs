/*!
Expressions --- compiled, tri-state-evaluable formulas.

An expression is the name-resolved counterpart of a parse tree: variables are
indices into an assignment rather than spans of source text, parentheses have
been dissolved, and the only producer is the
[compiler](crate::compiler::Compiler).

# Evaluation

[Expression::evaluate] follows the Kleene truth tables of
[valuation](crate::structures::valuation), with short-circuiting wherever the
left operand settles the result:

- `And`: a false left operand is decisive.
- `Or`: a true left operand is decisive.
- `Then`: a false antecedent makes the implication true.

An unknown antecedent never forces an implication true on its own --- the
consequent must itself be true.

```rust
# use trivalent::structures::expression::Expression;
let implication = Expression::Then(
    Box::new(Expression::Variable(0)),
    Box::new(Expression::Variable(1)),
);

assert_eq!(implication.evaluate(&[Some(false), Some(false)]), Some(true));
assert_eq!(implication.evaluate(&[None, Some(true)]), Some(true));
assert_eq!(implication.evaluate(&[None, Some(false)]), None);
```
*/

use crate::structures::valuation::{self, Value};

/// A compiled expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// A variable, as an index into an assignment.
    Variable(usize),

    /// Negation.
    Not(Box<Expression>),

    /// Conjunction.
    And(Box<Expression>, Box<Expression>),

    /// Disjunction.
    Or(Box<Expression>, Box<Expression>),

    /// Material implication.
    Then(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// The value of the expression under the given assignment.
    ///
    /// # Panics
    ///
    /// When a variable's index is outside the assignment.
    /// The compiler only emits indices it has resolved through a name table,
    /// so an out-of-bounds index is a size mismatch between compilation and
    /// solving rather than anything a caller could recover from.
    pub fn evaluate(&self, assignment: &[Value]) -> Value {
        match self {
            Self::Variable(index) => assignment[*index],

            Self::Not(operand) => valuation::not(operand.evaluate(assignment)),

            Self::And(left, right) => {
                let left_value = left.evaluate(assignment);
                if left_value == Some(false) {
                    return Some(false);
                }
                valuation::and(left_value, right.evaluate(assignment))
            }

            Self::Or(left, right) => {
                let left_value = left.evaluate(assignment);
                if left_value == Some(true) {
                    return Some(true);
                }
                valuation::or(left_value, right.evaluate(assignment))
            }

            Self::Then(left, right) => {
                let left_value = left.evaluate(assignment);
                if left_value == Some(false) {
                    return Some(true);
                }
                valuation::or(valuation::not(left_value), right.evaluate(assignment))
            }
        }
    }

    /// The conjunction of a sequence of expressions, or nothing if the
    /// sequence is empty.
    ///
    /// Used to combine premises before a solve: each premise is compiled
    /// against a shared name table, and their conjunction is solved over the
    /// shared variable universe.
    pub fn conjoin(expressions: impl IntoIterator<Item = Expression>) -> Option<Expression> {
        expressions
            .into_iter()
            .reduce(|conjunction, premise| Expression::And(Box::new(conjunction), Box::new(premise)))
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(index) => write!(f, "${index}"),
            Self::Not(operand) => write!(f, "Not({operand})"),
            Self::And(left, right) => write!(f, "And({left}, {right})"),
            Self::Or(left, right) => write!(f, "Or({left}, {right})"),
            Self::Then(left, right) => write!(f, "Then({left}, {right})"),
        }
    }
}
