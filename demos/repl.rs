//! Console check of the expression parser.
//!
//! - Enter any expression to make it current
//! - Define variables with `name=value` or `name=(re,im)`, e.g. `z=(3,4)`
//! - Press enter on an empty line to evaluate the current expression
//! - `q` quits

use plotexpr::{Complex64, Expr, Node, Registry};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

fn parse_value(text: &str) -> Option<Complex64> {
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        let (re, im) = inner.split_once(',')?;
        return Some(Complex64::new(re.parse().ok()?, im.parse().ok()?));
    }
    text.parse().ok().map(|re| Complex64::new(re, 0.0))
}

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let registry = Registry::<Complex64>::standard();
    let mut expr = Expr::from(Node::Literal(Complex64::new(0.0, 0.0)));
    let mut vars = HashMap::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter expression (q=quit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line: String = line?.chars().filter(|c| !c.is_whitespace()).collect();

        if line == "q" {
            break;
        }

        if let Some((name, value)) = line.split_once('=') {
            match parse_value(value) {
                Some(value) => {
                    vars.insert(name.to_string(), value);
                }
                None => eprintln!("Invalid value '{}'", value),
            }
        } else if line.is_empty() {
            vars.insert("i".to_string(), Complex64::i());
            vars.insert("I".to_string(), Complex64::i());
            match expr.evaluate(&vars, &registry) {
                Ok(value) => println!("Evaluated: {}", value),
                Err(err) => eprintln!("Error: {}", err),
            }
        } else {
            match Expr::parse(&line, &registry) {
                Ok(parsed) => {
                    println!("Parsed: {}", parsed);
                    expr = parsed;
                }
                Err(err) => eprintln!("Error: {}", err),
            }
        }
    }

    Ok(())
}
