use plotexpr::functions::register_functions;
use plotexpr::plot::{PlotFunction, SurfaceGrid};
use plotexpr::Registry;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let mut args = env::args().skip(1);
    let expression = args
        .next()
        .unwrap_or_else(|| "2sqrt(max(0,1-x^2-y^2))".to_string());
    let resolution = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);
    let axis_length = args.next().and_then(|s| s.parse().ok()).unwrap_or(2.0);

    let mut registry = Registry::new();
    register_functions(&mut registry);

    let result = PlotFunction::new(&expression, &registry).and_then(|function| {
        let grid = SurfaceGrid::new(resolution, axis_length)?;
        Ok(grid.sample(&function, &registry)?)
    });

    let samples = match result {
        Ok(samples) => samples,
        Err(err) => {
            eprintln!("Error in expression: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let (min_re, max_re) = samples.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, s| {
        (acc.0.min(s.value.re), acc.1.max(s.value.re))
    });
    let (min_im, max_im) = samples.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, s| {
        (acc.0.min(s.value.im), acc.1.max(s.value.im))
    });

    println!("f(z) = {}", expression);
    println!("{} samples on [-{}, {}]^2", samples.len(), axis_length, axis_length);
    println!("re(f) in [{}, {}]", min_re, max_re);
    println!("im(f) in [{}, {}]", min_im, max_im);

    ExitCode::SUCCESS
}
