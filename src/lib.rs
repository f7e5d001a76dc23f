//! A library for parsing propositional formulas, evaluating them under
//! three-valued logic, and determining which variables a set of premises
//! forces.
//!
//! trivalent takes formulas written with configurable symbols for AND, OR,
//! material implication, negation, parentheses, and free variables; compiles
//! them into validated, name-resolved expressions; evaluates those
//! expressions under Kleene (true/false/unknown) logic; and determines, by
//! exhaustive enumeration of assignments, which variables the formulas force
//! true, force false, or leave undetermined --- or that the formulas are
//! unsatisfiable.
//!
//! # Orientation
//!
//! The pipeline runs strictly one direction, and each stage has a module:
//!
//! - Text becomes tokens in the [scanner](crate::parser::Scanner).
//! - Tokens become a [parse tree](crate::structures::tree) in the
//!   [parser](crate::parser::Parser), which climbs the configured
//!   [operator table](crate::config::operators) by precedence.
//! - The tree, checked against pluggable
//!   [constraints](crate::compiler::constraints), becomes an
//!   [expression](crate::structures::expression) in the
//!   [compiler](crate::compiler::Compiler), with variables resolved to
//!   indices through a shared [name table](crate::db::names).
//! - The expression is evaluated against
//!   [tri-state assignments](crate::structures::valuation), and the
//!   [solve procedure](crate::procedures::solve) reports the per-variable
//!   [consensus](crate::reports::Report) of the satisfying assignments.
//!
//! A [context](crate::context) bundles the stages behind `add_premise` and
//! `solve` for the common several-premises workflow.
//!
//! This is not a general SAT solver: solving enumerates every assignment, is
//! exponential in the variable count, performs no pruning, rewriting, or
//! proof construction, and is practical for tens of variables at most.
//!
//! # Examples
//!
//! + Premises force values, leave variables undetermined, or contradict.
//!
//! ```rust
//! # use trivalent::config::Config;
//! # use trivalent::context::Context;
//! # use trivalent::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.add_premise("(A > B) & A").unwrap();
//! the_context.add_premise("B | C").unwrap();
//!
//! match the_context.solve().unwrap() {
//!     Report::Consensus(consensus) => {
//!         assert_eq!(consensus[0], Some(true)); // A is forced.
//!         assert_eq!(consensus[1], Some(true)); // B is forced.
//!         assert_eq!(consensus[2], None);       // C is undetermined.
//!     }
//!     Report::Contradiction => unreachable!(),
//! }
//! ```
//!
//! + The stages are plain functions, usable without a context.
//!
//! ```rust
//! # use trivalent::compiler::Compiler;
//! # use trivalent::db::names::NameTable;
//! # use trivalent::parser::Parser;
//! let tree = Parser::default().parse("~(A ∧ B)").unwrap();
//!
//! let mut names = NameTable::new();
//! let expression = Compiler::default().compile(&tree, &mut names).unwrap();
//!
//! assert_eq!(expression.evaluate(&[Some(true), Some(false)]), Some(true));
//! assert_eq!(expression.evaluate(&[Some(true), None]), None);
//! ```
//!
//! # Errors
//!
//! Parse errors carry the byte offset at which reading failed and the token
//! kinds which were acceptable there; compile errors carry the offending
//! node.
//! Both are deterministic --- identical input always reproduces the identical
//! error --- and local to a single call.
//! A contradiction is not an error but a [report](crate::reports::Report) of
//! a completed solve.
//!
//! # Logs
//!
//! Calls to [log!](log) are made under the targets listed in [misc::log];
//! no log implementation is provided.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod compiler;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod parser;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
