/*!
The operator table: which binary connectives exist, how they may be written,
and how chains of them group.

A table is an ordered list of [OperatorDescriptor]s, loosest binding first.
Precedence is *entirely* determined by list order --- the library assumes no
traditional ordering of AND, OR, and THEN beyond what the table specifies.
Negation and parentheses always bind tighter than every entry of the table.

Each descriptor accepts an ordered set of symbols ('aliases').
Symbols may be multi-character and non-ASCII, and the scanner matches the
longest symbol first, so overlapping symbols such as `>` and `->` coexist.

A symbol made of word characters would be read as a variable before the
scanner ever tries the operator symbols; tables are expected to use
punctuation symbols.

```rust
# use trivalent::config::operators::{Associativity, Connective, OperatorDescriptor, OperatorTable};
let table = OperatorTable::new(vec![OperatorDescriptor::new(
    Connective::Or,
    Associativity::None,
    ["|"],
)]);

assert_eq!(table.len(), 1);
assert!(table.descriptor(0).is_some_and(|d| d.matches("|")));
```
*/

use crate::structures::expression::Expression;

/// The identity of a binary connective.
///
/// A plain value rather than anything with behaviour of its own: parse-tree
/// nodes carry a connective, and the compiler dispatches on it when an
/// expression is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    /// Conjunction.
    And,

    /// Disjunction.
    Or,

    /// Material implication.
    Then,
}

impl Connective {
    /// The plain name of the connective, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Then => "then",
        }
    }

    /// The expression the connective stands for, over the given operands.
    pub fn expression(self, left: Expression, right: Expression) -> Expression {
        let (left, right) = (Box::new(left), Box::new(right));
        match self {
            Self::And => Expression::And(left, right),
            Self::Or => Expression::Or(left, right),
            Self::Then => Expression::Then(left, right),
        }
    }
}

/// How three or more operands chained on a same-precedence operator group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    /// Chains fold from the left: `a > b > c` is `(a > b) > c`.
    Left,

    /// Chains fold from the right: `a > b > c` is `a > (b > c)`.
    Right,

    /// Chains are illegal without explicit parentheses.
    None,
}

/// A binary operator: its identity, its associativity, and the symbols it is
/// written with.
#[derive(Clone, Debug)]
pub struct OperatorDescriptor {
    /// The identity of the operator.
    pub connective: Connective,

    /// How chained uses of the operator group.
    pub associativity: Associativity,

    /// The accepted symbols, in the order given.
    symbols: Vec<String>,
}

impl OperatorDescriptor {
    /// A descriptor accepting the given symbols.
    pub fn new<S: Into<String>>(
        connective: Connective,
        associativity: Associativity,
        symbols: impl IntoIterator<Item = S>,
    ) -> Self {
        OperatorDescriptor {
            connective,
            associativity,
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given text is a symbol of the operator.
    pub fn matches(&self, text: &str) -> bool {
        self.symbols.iter().any(|symbol| symbol == text)
    }

    /// The accepted symbols, in the order given.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

/// The table of binary operators, ordered loosest to tightest binding.
#[derive(Clone, Debug)]
pub struct OperatorTable {
    descriptors: Vec<OperatorDescriptor>,
}

impl OperatorTable {
    /// A table of the given descriptors, in loosest-first order.
    pub fn new(descriptors: Vec<OperatorDescriptor>) -> Self {
        OperatorTable { descriptors }
    }

    /// The number of precedence levels in the table.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the table has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The descriptor at the given precedence level, zero being loosest.
    pub fn descriptor(&self, level: usize) -> Option<&OperatorDescriptor> {
        self.descriptors.get(level)
    }

    /// The descriptors of the table, loosest first.
    pub fn descriptors(&self) -> impl Iterator<Item = &OperatorDescriptor> {
        self.descriptors.iter()
    }

    /// Every accepted symbol across the table, longest first.
    ///
    /// Longest-first order is what lets the scanner take the longest match at
    /// a position, disambiguating overlaps such as `>` within `->`.
    pub fn symbols_longest_first(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .descriptors
            .iter()
            .flat_map(OperatorDescriptor::symbols)
            .collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()));
        symbols
    }
}

impl Default for OperatorTable {
    /// AND, OR, and THEN, loosest to tightest in that order, all
    /// left-associative, with the usual symbol sets.
    fn default() -> Self {
        OperatorTable::new(vec![
            OperatorDescriptor::new(
                Connective::And,
                Associativity::Left,
                ["&", "∧", "·", "∙", "•"],
            ),
            OperatorDescriptor::new(Connective::Or, Associativity::Left, ["|", "∨", "+"]),
            OperatorDescriptor::new(
                Connective::Then,
                Associativity::Left,
                [">", "->", "→", "⇒", "⊃"],
            ),
        ])
    }
}
