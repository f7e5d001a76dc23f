/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, narrowed to a handful
of targets.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [scanner](crate::parser::Scanner).
    pub const SCANNER: &str = "scanner";

    /// Logs related to the [parser](crate::parser::Parser).
    pub const PARSER: &str = "parser";

    /// Logs related to the [compiler](crate::compiler::Compiler).
    pub const COMPILER: &str = "compiler";

    /// Logs related to the [solve procedure](crate::procedures::solve).
    pub const SOLVER: &str = "solver";
}
