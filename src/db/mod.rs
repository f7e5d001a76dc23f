/*!
Databases.

The library keeps exactly one mutable structure across calls: the
[name database](names), which maps variable names to the dense indices used
by expressions and assignments.
Everything else in the pipeline is a pure function over immutable inputs.
*/

pub mod names;
pub use names::{NameComparison, NameTable};
