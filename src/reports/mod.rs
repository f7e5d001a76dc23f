/*!
Reports on solves.
*/

use crate::structures::valuation::{self, CValuation, Value};

/// The outcome of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// The per-variable consensus across every satisfying assignment:
    /// `Some(true)` and `Some(false)` are forced values, `None` marks a
    /// variable at least two satisfying assignments disagree on.
    Consensus(CValuation),

    /// No assignment satisfies the premises.
    Contradiction,
}

impl Report {
    /// Whether the solve found no satisfying assignment.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Report::Contradiction)
    }

    /// The consensus value of the variable at the given index, if the solve
    /// produced a consensus containing the index.
    pub fn value_of(&self, index: usize) -> Option<Value> {
        match self {
            Report::Consensus(consensus) => consensus.get(index).copied(),
            Report::Contradiction => None,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Contradiction => write!(f, "contradiction"),

            Report::Consensus(consensus) => {
                let rendered = consensus
                    .iter()
                    .map(|value| valuation::symbol(*value).to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "{rendered}")
            }
        }
    }
}
