use plotexpr::plot::bindings;
use plotexpr::{Complex64, Evaluator, Registry};

fn main() {
    pretty_env_logger::init();

    let mut evaluator = Evaluator::with_registry(Registry::<Complex64>::standard(), 100);

    let contexts: Vec<_> = (0..8)
        .map(|k| bindings(k as f64 * 0.25, 0.0))
        .collect();

    let expression = "z^2 + w";
    match evaluator.evaluate_batch(expression, &contexts) {
        Ok(results) => {
            for (i, result) in results.iter().enumerate() {
                println!("Result {}: {:?}", i, result);
            }
        }
        Err(err) => println!("Error: {}", err),
    }

    let expression = "exp(i(z))";
    let results = evaluator
        .evaluate_batch(expression, &contexts)
        .expect("Failed to parse");
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => println!("{}({}) = {}", expression, contexts[i]["z"], value),
            Err(err) => println!("Error: {}", err),
        }
    }
}
