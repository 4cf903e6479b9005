/// Console traps: printing, argument access, console variables.
///
/// Strings come back owned. Callers may hold any number of results at once.
pub trait Console {
    /// Prints a line to the engine console.
    fn print(&mut self, msg: &str);

    /// Reports an unrecoverable error. A live engine aborts the UI module;
    /// the call returns only on hosts that merely record it.
    fn error(&mut self, msg: &str);

    /// Number of tokens in the command being executed.
    fn argc(&self) -> usize;

    /// Token `n` of the command being executed, empty when out of range.
    fn argv(&self, n: usize) -> String;

    /// Numeric value of a console variable, `0.0` when unset or not numeric.
    fn cvar_value(&self, name: &str) -> f32;

    /// String value of a console variable, empty when unset.
    fn cvar_string(&self, name: &str) -> String;
}
