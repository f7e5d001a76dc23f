/// A configuration option: a value together with its name and permitted
/// range.
///
/// The name and range are kept with the value so a consumer (the CLI, say)
/// can report what may be set without a table of its own.
#[derive(Clone)]
pub struct ConfigOption<T> {
    /// The name of the option, as used by consumers.
    pub name: &'static str,

    /// The smallest permitted value.
    pub min: T,

    /// The largest permitted value.
    pub max: T,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    /// The permitted range of the option.
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}
