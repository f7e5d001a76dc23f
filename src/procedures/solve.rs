/*!
Determines which variables an expression forces.

# Overview

[solve] enumerates every full assignment of the variable universe --- each
integer below 2^*n* read as *n* bits, bit *i* giving the value of variable
*i* --- and evaluates the expression on each.
Assignments on which the expression is exactly true are the satisfying
assignments; unknown is not good enough.

- No satisfying assignment: the expression is a contradiction, which is a
  whole-result signal rather than a per-variable value.
- Otherwise, the per-variable consensus across the satisfying assignments is
  reported: a variable every satisfying assignment agrees on is forced to
  that value, and a variable any two satisfying assignments disagree on is
  unknown --- the premises leave it undetermined.

The consensus is maintained as a running vector rather than a list of kept
assignments: it starts as the first satisfying assignment, and each later
one knocks any disagreeing position to unknown, where it stays.

Cost is O(2^*n* · evaluation), with no pruning --- practical for tens of
variables, not hundreds.
The procedure trusts its caller to bound *n*;
[Context::solve](crate::context::Context::solve) enforces the configured cap
before calling.

# Example

```rust
# use trivalent::procedures::solve;
# use trivalent::reports::Report;
# use trivalent::structures::expression::Expression;
// (A > B) & A forces both variables true.
let premise = Expression::And(
    Box::new(Expression::Then(
        Box::new(Expression::Variable(0)),
        Box::new(Expression::Variable(1)),
    )),
    Box::new(Expression::Variable(0)),
);

assert_eq!(solve(&premise, 2), Report::Consensus(vec![Some(true), Some(true)]));
```
*/

use crate::misc::log::targets;
use crate::reports::Report;
use crate::structures::expression::Expression;
use crate::structures::valuation::{self, CValuation};

/// Evaluates the expression on every assignment of `variable_count`
/// variables, reporting the consensus of the satisfying assignments, or a
/// contradiction if there are none.
///
/// # Panics
///
/// When `variable_count` is not below the pointer width --- the enumeration
/// counter could not represent 2^count.
pub fn solve(expression: &Expression, variable_count: usize) -> Report {
    let mut consensus: Option<CValuation> = None;
    let mut satisfying: usize = 0;

    for pattern in 0..(1_usize << variable_count) {
        let assignment = valuation::from_bits(pattern, variable_count);

        if expression.evaluate(&assignment) != Some(true) {
            continue;
        }
        satisfying += 1;

        match &mut consensus {
            None => consensus = Some(assignment),
            Some(agreed) => {
                for (agreed, value) in agreed.iter_mut().zip(&assignment) {
                    if *agreed != *value {
                        *agreed = None;
                    }
                }
            }
        }
    }

    match consensus {
        None => {
            log::debug!(target: targets::SOLVER, "contradiction over {variable_count} variables");
            Report::Contradiction
        }

        Some(consensus) => {
            log::debug!(
                target: targets::SOLVER,
                "{satisfying} of {} assignments satisfy over {variable_count} variables",
                1_usize << variable_count,
            );
            Report::Consensus(consensus)
        }
    }
}
