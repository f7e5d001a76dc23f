/*!
The name database --- an ordered, append-only mapping from variable names to
indices.

Indices are assigned in first-seen order, never reassigned, and never
removed, so they are stable across repeated compiles which share the table.
Sharing one table across several formulas is what keeps a variable's index
aligned across premises, and with it the meaning of each position in an
assignment.

A table is either owned by a single sequential caller or externally
synchronized before being shared across concurrent compiles --- the table
itself performs no locking.

```rust
# use trivalent::db::names::NameTable;
let mut names = NameTable::new();

assert_eq!(names.resolve("A"), 0);
assert_eq!(names.resolve("B"), 1);
assert_eq!(names.resolve("A"), 0);
assert_eq!(names.len(), 2);
```
*/

/// How two variable names are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameComparison {
    /// Names are equal when their characters are equal.
    #[default]
    Exact,

    /// Names are equal up to (Unicode) case.
    CaseInsensitive,
}

impl NameComparison {
    /// Whether the comparison takes `a` and `b` to be the same name.
    pub fn same(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// An ordered, append-only mapping from variable name to zero-based index.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    names: Vec<String>,
    comparison: NameComparison,
}

impl NameTable {
    /// An empty table under exact comparison.
    pub fn new() -> Self {
        NameTable::default()
    }

    /// An empty table under the given comparison.
    pub fn with_comparison(comparison: NameComparison) -> Self {
        NameTable {
            names: Vec::new(),
            comparison,
        }
    }

    /// The index of the name, if the name has been seen.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|seen| self.comparison.same(seen, name))
    }

    /// The index of the name, appending the name at the next free index if it
    /// has not been seen.
    ///
    /// The spelling stored is that of the *first* occurrence; under
    /// case-insensitive comparison later spellings resolve to it.
    pub fn resolve(&mut self, name: &str) -> usize {
        match self.index_of(name) {
            Some(index) => index,
            None => {
                self.names.push(name.to_owned());
                self.names.len() - 1
            }
        }
    }

    /// The name at the given index, if the index has been assigned.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The number of names in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names of the table, in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The comparison the table resolves names under.
    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order() {
        let mut names = NameTable::new();
        assert_eq!(names.resolve("C"), 0);
        assert_eq!(names.resolve("A"), 1);
        assert_eq!(names.resolve("C"), 0);
        assert_eq!(names.name_of(1), Some("A"));
        assert_eq!(names.name_of(2), None);
    }

    #[test]
    fn case_insensitive_resolution() {
        let mut names = NameTable::with_comparison(NameComparison::CaseInsensitive);
        assert_eq!(names.resolve("Cat"), 0);
        assert_eq!(names.resolve("CAT"), 0);
        assert_eq!(names.resolve("dog"), 1);
        assert_eq!(names.name_of(0), Some("Cat"));
    }
}
