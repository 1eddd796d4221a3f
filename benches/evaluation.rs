use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use plotexpr::functions::real;
use plotexpr::plot::{bindings, PlotFunction, SurfaceGrid};
use plotexpr::{Complex64, Evaluator, Expr, Registry};
use std::collections::HashMap;

fn real_evaluator() -> Evaluator<f64> {
    let mut registry = Registry::new();
    real::register(&mut registry);
    Evaluator::with_registry(registry, 100)
}

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let mut evaluator = real_evaluator();
    let registry = Registry::<f64>::standard_real();

    let expr = "2 + 3 * 4";
    let parsed = Expr::parse(expr, &registry).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("cached_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(expr), &black_box(HashMap::new())))
    });

    group.bench_function("uncached_arithmetic", |b| {
        b.iter(|| {
            Expr::parse(black_box(expr), &registry)
                .unwrap()
                .evaluate(&HashMap::new(), &registry)
        })
    });

    group.bench_function("preparsed_arithmetic", |b| {
        b.iter(|| black_box(&parsed).evaluate(&HashMap::new(), &registry))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark nested arithmetic with groups
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let mut evaluator = real_evaluator();
    let registry = Registry::<f64>::standard_real();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let parsed = Expr::parse(expr, &registry).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("cached_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(expr), &black_box(HashMap::new())))
    });

    group.bench_function("preparsed_complex_arithmetic", |b| {
        b.iter(|| black_box(&parsed).evaluate(&HashMap::new(), &registry))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark function calls and variables
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let registry = Registry::<f64>::standard_real();

    let expr = "2sqrt(max(0,1-x^2-y^2))";
    let parsed = Expr::parse(expr, &registry).unwrap();
    let vars = HashMap::from([("x".to_string(), 0.25), ("y".to_string(), 0.5)]);

    let meval_expr: meval::Expr = "2*sqrt(max(0,1-x^2-y^2))".parse().unwrap();
    let meval_func = meval_expr.bind2("x", "y").unwrap();

    group.bench_function("preparsed_function_call", |b| {
        b.iter(|| black_box(&parsed).evaluate(black_box(&vars), &registry))
    });

    group.bench_function("native_rust_function_call", |b| {
        b.iter(|| {
            let (x, y) = black_box((0.25f64, 0.5f64));
            2.0 * f64::max(0.0, 1.0 - x.powi(2) - y.powi(2)).sqrt()
        })
    });

    group.bench_function("meval_function_call", |b| {
        b.iter(|| meval_func(black_box(0.25), black_box(0.5)))
    });
}

/// Benchmark complex-valued evaluation and grid sampling
fn benchmark_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("Surface Evaluation");

    let registry = Registry::<Complex64>::standard();
    let function = PlotFunction::new("exp(i(z))+sin(z)^2", &registry).unwrap();
    let vars = bindings(0.5, -0.5);

    group.bench_function("single_point", |b| {
        b.iter(|| function.expr().evaluate(black_box(&vars), &registry))
    });

    let grid = SurfaceGrid::new(50, 10.0).unwrap();
    group.bench_function("grid_50x50", |b| {
        b.iter(|| grid.sample(black_box(&function), &registry).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_surface
);
criterion_main!(benches);
