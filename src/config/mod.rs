/*!
Configuration of a context.

A [Config] fixes everything about how a context reads and solves formulas:
the operator table (and with it, precedence), the policy under which variable
names are compared, and the ceiling on the size of the variable universe a
solve will be attempted over.

The parser and compiler are deterministic over a configuration: identical
input under an identical configuration (and name-table state) always yields
identical trees, expressions, and errors.
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod operators;
pub use operators::{Associativity, Connective, OperatorDescriptor, OperatorTable};

use crate::db::names::NameComparison;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The binary operator table, ordered loosest to tightest binding.
    pub operators: OperatorTable,

    /// How variable names are compared when resolving indices.
    pub name_comparison: NameComparison,

    /// The largest variable universe a context will solve over.
    ///
    /// Solving enumerates every assignment, so cost doubles with each
    /// variable; the cap is the context's only guard against a runaway
    /// solve.
    pub variable_cap: ConfigOption<usize>,
}

impl Default for Config {
    /// The default operator table, exact name comparison, and a variable cap
    /// which keeps a solve in the millions of evaluations.
    fn default() -> Self {
        Config {
            operators: OperatorTable::default(),
            name_comparison: NameComparison::Exact,
            variable_cap: ConfigOption {
                name: "variable_cap",
                min: 0,
                max: usize::BITS as usize - 1,
                value: 24,
            },
        }
    }
}
