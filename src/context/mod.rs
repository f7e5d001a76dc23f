/*!
The context --- to which premises are added and within which solves take place.

A context bundles the pipeline behind two calls: [add_premise] parses and
compiles one formula against the context's shared name table, and [solve]
conjoins every premise and solves over the shared variable universe.
Sharing the table is what keeps a variable's index aligned across premises,
so "B" in one premise and "B" in another are the same variable of the
conjunction.

[add_premise]: Context::add_premise
[solve]: Context::solve

# Example

```rust
# use trivalent::config::Config;
# use trivalent::context::Context;
# use trivalent::reports::Report;
let mut the_context = Context::from_config(Config::default());

the_context.add_premise("A > B").unwrap();
the_context.add_premise("A").unwrap();

let report = the_context.solve().unwrap();
assert_eq!(report, Report::Consensus(vec![Some(true), Some(true)]));
```

All methods are synchronous and single-threaded; a context is either owned by
one sequential caller or externally synchronized.
*/

use crate::compiler::Compiler;
use crate::config::Config;
use crate::db::names::NameTable;
use crate::parser::Parser;
use crate::procedures;
use crate::reports::Report;
use crate::structures::expression::Expression;
use crate::types::err::{ErrorKind, SolveError};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Premises may be added; no solve has run since the last addition.
    Input,

    /// The last solve found a consensus.
    Satisfiable,

    /// The last solve found a contradiction.
    Contradiction,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Contradiction => write!(f, "Contradiction"),
        }
    }
}

/// A context: a configuration, a shared name table, and the premises
/// compiled against the table.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    parser: Parser,
    compiler: Compiler,
    names: NameTable,
    premises: Vec<Expression>,
    state: ContextState,
    last_report: Option<Report>,
}

impl Context {
    /// Creates a context from some given configuration, with the default
    /// compiler.
    pub fn from_config(config: Config) -> Self {
        Context::with_compiler(config, Compiler::default())
    }

    /// Creates a context compiling through the given compiler --- the way to
    /// supply constraints other than the default.
    pub fn with_compiler(config: Config, compiler: Compiler) -> Self {
        Context {
            parser: Parser::new(config.operators.clone()),
            compiler,
            names: NameTable::with_comparison(config.name_comparison),
            premises: Vec::new(),
            state: ContextState::Input,
            last_report: None,
            config,
        }
    }

    /// Parses and compiles one premise against the shared name table.
    ///
    /// Fresh variable names extend the universe; repeated names resolve to
    /// their first-seen indices.
    pub fn add_premise(&mut self, source: &str) -> Result<(), ErrorKind> {
        let tree = self.parser.parse(source)?;
        let expression = self.compiler.compile(&tree, &mut self.names)?;
        self.premises.push(expression);
        self.state = ContextState::Input;
        self.last_report = None;
        Ok(())
    }

    /// The index of the given name, appending it to the universe if fresh.
    ///
    /// Lets a caller fix a variable universe (and its order) before any
    /// premise mentions the variables.
    pub fn resolve_name(&mut self, name: &str) -> usize {
        self.names.resolve(name)
    }

    /// The name table shared by every premise of the context.
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// The number of premises added so far.
    pub fn premise_count(&self) -> usize {
        self.premises.len()
    }

    /// The state of the context.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// The report of the most recent solve, if one has run since the last
    /// premise was added.
    pub fn report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    /// Conjoins every premise and solves over the shared variable universe.
    ///
    /// With no premises the conjunction is vacuously true, and every
    /// variable of the universe is reported unknown.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let count = self.names.len();
        let cap = self.config.variable_cap.value;
        if count > cap {
            return Err(ErrorKind::from(SolveError::VariableCapExceeded {
                count,
                cap,
            }));
        }

        let report = match Expression::conjoin(self.premises.iter().cloned()) {
            None => Report::Consensus(vec![None; count]),
            Some(conjunction) => procedures::solve(&conjunction, count),
        };

        self.state = match report {
            Report::Consensus(_) => ContextState::Satisfiable,
            Report::Contradiction => ContextState::Contradiction,
        };
        self.last_report = Some(report.clone());

        Ok(report)
    }
}
