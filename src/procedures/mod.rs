/*!
Procedures over compiled expressions.
*/

pub mod solve;
pub use solve::solve;
