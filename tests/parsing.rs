use trivalent::compiler::Compiler;
use trivalent::config::operators::{
    Associativity, Connective, OperatorDescriptor, OperatorTable,
};
use trivalent::db::names::NameTable;
use trivalent::parser::Parser;
use trivalent::types::err::ParseErrorKind;

fn expression_of(parser: &Parser, source: &str) -> String {
    let tree = parser.parse(source).unwrap();
    let mut names = NameTable::default();
    let compiler = Compiler::unconstrained();
    compiler.compile(&tree, &mut names).unwrap().to_string()
}

mod default_table {

    use super::*;

    #[test]
    fn conjunction_binds_loosest() {
        let parser = Parser::default();
        assert_eq!(expression_of(&parser, "A & B | C"), "And($0, Or($1, $2))");
        assert_eq!(expression_of(&parser, "A | B > C"), "Or($0, Then($1, $2))");
    }

    #[test]
    fn every_alias_reads_as_its_operator() {
        let parser = Parser::default();
        for source in ["A & B", "A ∧ B", "A · B", "A ∙ B", "A • B"] {
            assert_eq!(expression_of(&parser, source), "And($0, $1)");
        }
        for source in ["A | B", "A ∨ B", "A + B"] {
            assert_eq!(expression_of(&parser, source), "Or($0, $1)");
        }
        for source in ["A > B", "A -> B", "A → B", "A ⇒ B", "A ⊃ B"] {
            assert_eq!(expression_of(&parser, source), "Then($0, $1)");
        }
    }

    #[test]
    fn chains_fold_left() {
        let parser = Parser::default();
        assert_eq!(
            expression_of(&parser, "A > B > C"),
            "Then(Then($0, $1), $2)"
        );
    }

    #[test]
    fn parentheses_and_negation_bind_tightest() {
        let parser = Parser::default();
        assert_eq!(expression_of(&parser, "~A & B"), "And(Not($0), $1)");
        assert_eq!(expression_of(&parser, "(A & B) | C"), "Or(And($0, $1), $2)");
    }
}

mod custom_tables {

    use super::*;

    fn single(connective: Connective, associativity: Associativity, symbol: &str) -> Parser {
        Parser::new(OperatorTable::new(vec![OperatorDescriptor::new(
            connective,
            associativity,
            [symbol],
        )]))
    }

    #[test]
    fn right_associative_chains_fold_right() {
        let parser = single(Connective::Then, Associativity::Right, ">");
        assert_eq!(
            expression_of(&parser, "A > B > C > D"),
            "Then($0, Then($1, Then($2, $3)))"
        );
    }

    #[test]
    fn non_associative_chains_are_errors() {
        let parser = single(Connective::Or, Associativity::None, "|");
        assert!(parser.parse("A | B").is_ok());
        assert!(parser.parse("(A | B) | C").is_ok());

        let error = parser.parse("A | B | C").unwrap_err();
        assert_eq!(error.offset, 6);
        assert_eq!(
            error.kind,
            ParseErrorKind::NonAssociativeChain { operator: "or" }
        );
    }

    #[test]
    fn unlisted_symbols_fail_lexically() {
        let parser = single(Connective::And, Associativity::Left, "&");
        let error = parser.parse("A | B").unwrap_err();
        assert_eq!(error.offset, 2);
        assert!(matches!(error.kind, ParseErrorKind::Lexical { .. }));
    }

    #[test]
    fn multi_character_aliases_take_longest_match() {
        let parser = Parser::new(OperatorTable::new(vec![
            OperatorDescriptor::new(Connective::Or, Associativity::Left, ["="]),
            OperatorDescriptor::new(Connective::Then, Associativity::Left, ["=>"]),
        ]));
        assert_eq!(expression_of(&parser, "A => B"), "Then($0, $1)");
        assert_eq!(expression_of(&parser, "A = B"), "Or($0, $1)");
    }
}

mod errors {

    use super::*;
    use trivalent::structures::token::TokenKind;

    #[test]
    fn offsets_are_byte_offsets() {
        // The alias before the failure is three bytes long.
        let parser = Parser::default();
        let error = parser.parse("A ∧ @").unwrap_err();
        assert_eq!(error.offset, 6);
    }

    #[test]
    fn messages_read_in_full() {
        let parser = Parser::default();

        let error = parser.parse("A &").unwrap_err();
        assert_eq!(
            error.to_string(),
            "unexpected end of input, expected a variable, '~' or '(' at character 3"
        );

        let error = parser.parse("A B").unwrap_err();
        assert_eq!(error.expected(), &[TokenKind::EndOfInput]);
    }
}
