use trivalent::{
    compiler::constraints::{self, ParenthesizedNot},
    config::Config,
    context::Context,
    db::names::NameComparison,
    parser::Parser,
    reports::Report,
    types::err::ErrorKind,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config = Config::default();
    let mut check_only = false;
    let mut premises: Vec<String> = Vec::new();

    'arg_examination: for arg in args.iter().skip(1) {
        let mut split = arg.split('=');
        match split.next() {
            Some("--help") => {
                print_usage();
                return;
            }

            Some("--check") => check_only = true,

            Some("--case_insensitive") => {
                config.name_comparison = NameComparison::CaseInsensitive;
            }

            Some("--variable_cap") => {
                let (min, max) = config.variable_cap.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            config.variable_cap.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("variable_cap requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some(flag) if flag.starts_with("--") => {
                println!("unrecognised argument: {flag}");
                std::process::exit(1);
            }

            _ => premises.push(arg.clone()),
        }
    }

    if premises.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    if check_only {
        std::process::exit(check(&config, &premises));
    }

    let mut the_context = Context::from_config(config);

    for premise in &premises {
        if let Err(error) = the_context.add_premise(premise) {
            display_error(premise, &error);
            std::process::exit(1);
        }
    }

    match the_context.solve() {
        Err(error) => {
            println!("{error}");
            std::process::exit(1);
        }

        Ok(Report::Contradiction) => println!("contradiction"),

        Ok(Report::Consensus(consensus)) => {
            for (index, value) in consensus.iter().enumerate() {
                let name = the_context.names().name_of(index).unwrap_or("?");
                let rendered = match value {
                    Some(true) => "true",
                    Some(false) => "false",
                    None => "undetermined",
                };
                println!("{name}: {rendered}");
            }
        }
    }
}

/// Parses each premise and reports every violation of the default
/// constraint, without solving.
fn check(config: &Config, premises: &[String]) -> i32 {
    let parser = Parser::new(config.operators.clone());
    let mut trouble = false;

    for premise in premises {
        match parser.parse(premise) {
            Err(error) => {
                display_error(premise, &ErrorKind::from(error));
                trouble = true;
            }

            Ok(tree) => {
                for violation in constraints::collect_violations(&tree, &ParenthesizedNot) {
                    display_caret(premise, violation.node.span().start);
                    println!("{}", violation.message);
                    trouble = true;
                }
            }
        }
    }

    match trouble {
        true => 1,
        false => 0,
    }
}

/// Displays the error under the premise it arose from, with a caret where an
/// offset is known.
fn display_error(premise: &str, error: &ErrorKind) {
    let offset = match error {
        ErrorKind::Parse(parse_error) => Some(parse_error.offset),
        ErrorKind::Compile(compile_error) => Some(compile_error.node.span().start),
        ErrorKind::Solve(_) => None,
    };

    match offset {
        Some(offset) => display_caret(premise, offset),
        None => println!("{premise}"),
    }
    println!("{error}");
}

/// The premise with a caret under the character at the byte offset.
fn display_caret(premise: &str, offset: usize) {
    println!("{premise}");
    let column = premise[..offset.min(premise.len())].chars().count();
    println!("{}^", " ".repeat(column));
}

fn print_usage() {
    println!("usage: trivalent_cli [options] <premise>...");
    println!();
    println!("Each premise is a propositional formula, e.g. '(A > B) & A'.");
    println!("All premises are compiled against one variable universe, conjoined, and solved.");
    println!();
    println!("options:");
    println!("  --check               report all constraint violations, without solving");
    println!("  --case_insensitive    compare variable names up to case");
    println!("  --variable_cap=N      refuse to solve over more than N variables");
    println!("  --help                this message");
}
