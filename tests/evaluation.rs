use trivalent::structures::{
    expression::Expression,
    valuation::{self, Value},
};

const VALUES: [Value; 3] = [Some(false), None, Some(true)];

mod tables {

    use super::*;

    #[test]
    fn conjunction() {
        for left in VALUES {
            for right in VALUES {
                let expected = match (left, right) {
                    (Some(false), _) | (_, Some(false)) => Some(false),
                    (Some(true), Some(true)) => Some(true),
                    _ => None,
                };
                assert_eq!(valuation::and(left, right), expected);
            }
        }
    }

    #[test]
    fn disjunction() {
        for left in VALUES {
            for right in VALUES {
                let expected = match (left, right) {
                    (Some(true), _) | (_, Some(true)) => Some(true),
                    (Some(false), Some(false)) => Some(false),
                    _ => None,
                };
                assert_eq!(valuation::or(left, right), expected);
            }
        }
    }

    #[test]
    fn negation() {
        assert_eq!(valuation::not(Some(true)), Some(false));
        assert_eq!(valuation::not(Some(false)), Some(true));
        assert_eq!(valuation::not(None), None);
    }

    #[test]
    fn implication_as_material_conditional() {
        // x > y agrees with ~x | y on every pair of values.
        let implication = Expression::Then(
            Box::new(Expression::Variable(0)),
            Box::new(Expression::Variable(1)),
        );
        for left in VALUES {
            for right in VALUES {
                let expected = valuation::or(valuation::not(left), right);
                assert_eq!(implication.evaluate(&[left, right]), expected);
            }
        }
    }
}

mod expressions {

    use super::*;
    use rand::Rng;

    fn random_assignment(count: usize) -> Vec<Value> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| match rng.gen_range(0..3) {
                0 => Some(false),
                1 => Some(true),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn double_negation_is_an_identity() {
        let variable = Expression::Variable(0);
        let doubled = Expression::Not(Box::new(Expression::Not(Box::new(variable.clone()))));
        for _ in 0..64 {
            let assignment = random_assignment(1);
            assert_eq!(doubled.evaluate(&assignment), variable.evaluate(&assignment));
        }
    }

    #[test]
    fn conjoin_folds_left() {
        let expressions = (0..3).map(Expression::Variable);
        let conjunction = Expression::conjoin(expressions).unwrap();
        assert_eq!(conjunction.to_string(), "And(And($0, $1), $2)");
        assert!(Expression::conjoin([]).is_none());
    }

    #[test]
    fn short_circuits_skip_the_right_operand() {
        // The right operand indexes a variable the assignment lacks, so the
        // evaluation only succeeds if the left operand settles the value.
        let absent = Box::new(Expression::Variable(7));
        let present = Box::new(Expression::Variable(0));

        let conjunction = Expression::And(present.clone(), absent.clone());
        assert_eq!(conjunction.evaluate(&[Some(false)]), Some(false));

        let disjunction = Expression::Or(present.clone(), absent.clone());
        assert_eq!(disjunction.evaluate(&[Some(true)]), Some(true));

        let implication = Expression::Then(present, absent);
        assert_eq!(implication.evaluate(&[Some(false)]), Some(true));
    }
}
