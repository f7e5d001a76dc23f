use trivalent::compiler::{
    constraints::{collect_violations, ParenthesizedNot},
    Compiler,
};
use trivalent::db::names::{NameComparison, NameTable};
use trivalent::parser::Parser;

fn parse(source: &str) -> trivalent::structures::tree::ParseTree {
    Parser::default().parse(source).unwrap()
}

mod parenthesized_not {

    use super::*;

    #[test]
    fn bare_double_negation_is_rejected() {
        let mut names = NameTable::default();
        let compiler = Compiler::default();

        assert!(compiler.compile(&parse("~~A"), &mut names).is_err());
        assert!(compiler.compile(&parse("~(~A)"), &mut names).is_ok());
    }

    #[test]
    fn rejection_happens_before_names_resolve() {
        let mut names = NameTable::default();
        let compiler = Compiler::default();

        assert!(compiler.compile(&parse("~~Fresh"), &mut names).is_err());
        assert_eq!(names.len(), 0);
    }

    #[test]
    fn unconstrained_compilers_accept_anything() {
        let mut names = NameTable::default();
        let compiler = Compiler::unconstrained();

        assert!(compiler.compile(&parse("~~~A"), &mut names).is_ok());
    }

    #[test]
    fn every_violation_is_collected() {
        let tree = parse("~~A & ~~B");
        let violations = collect_violations(&tree, &ParenthesizedNot);
        assert_eq!(violations.len(), 2);
        for violation in &violations {
            assert!(violation.message.contains("'not'"));
        }
    }
}

mod specific_variables {

    use super::*;
    use trivalent::compiler::constraints::SpecificVariables;

    #[test]
    fn unlisted_names_are_rejected() {
        let constraint = SpecificVariables::new(["p", "q"], NameComparison::Exact);
        let compiler = Compiler::new(vec![Box::new(constraint)]);
        let mut names = NameTable::default();

        assert!(compiler.compile(&parse("p & q"), &mut names).is_ok());
        assert!(compiler.compile(&parse("p & r"), &mut names).is_err());
    }

    #[test]
    fn comparison_may_ignore_case() {
        let constraint = SpecificVariables::new(["p"], NameComparison::CaseInsensitive);
        let compiler = Compiler::new(vec![Box::new(constraint)]);
        let mut names = NameTable::default();

        assert!(compiler.compile(&parse("P"), &mut names).is_ok());

        let constraint = SpecificVariables::new(["p"], NameComparison::Exact);
        let compiler = Compiler::new(vec![Box::new(constraint)]);
        assert!(compiler.compile(&parse("P"), &mut names).is_err());
    }
}

mod name_tables {

    use super::*;

    #[test]
    fn indices_persist_across_compilations() {
        let mut names = NameTable::default();
        let compiler = Compiler::default();

        let first = compiler.compile(&parse("A > B"), &mut names).unwrap();
        let second = compiler.compile(&parse("B > A"), &mut names).unwrap();

        assert_eq!(names.len(), 2);
        assert_eq!(first.to_string(), "Then($0, $1)");
        assert_eq!(second.to_string(), "Then($1, $0)");
    }

    #[test]
    fn case_insensitive_tables_merge_names() {
        let mut names = NameTable::with_comparison(NameComparison::CaseInsensitive);
        let compiler = Compiler::unconstrained();

        compiler.compile(&parse("Rain & rain"), &mut names).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names.name_of(0), Some("Rain"));
    }
}
