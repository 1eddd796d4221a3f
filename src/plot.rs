//! Sampling an expression of `z = x + iy` over a square grid, the way the
//! surface plotter feeds its renderer.

use crate::ast::{EvalError, Expr, Node, Registry, SyntaxError};
use log::{debug, info};
use num_complex::Complex64;
use rayon::prelude::*;
use std::collections::HashMap;
use std::f64::consts::{E, PI};
use std::time::Instant;
use thiserror::Error;

/// Points per side, for grids of 1 to 400 cells per side.
pub const MIN_RESOLUTION: usize = 2;
pub const MAX_RESOLUTION: usize = 401;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error(
        "Resolution must be between {min} and {max}, got {0}",
        min = MIN_RESOLUTION,
        max = MAX_RESOLUTION
    )]
    InvalidResolution(usize),

    #[error("Axis length must be positive and finite, got {0}")]
    InvalidAxisLength(f64),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Variables available to a plotted expression at the point `(x, y)`.
pub fn bindings(x: f64, y: f64) -> HashMap<String, Complex64> {
    HashMap::from([
        ("x".to_string(), Complex64::new(x, 0.0)),
        ("y".to_string(), Complex64::new(y, 0.0)),
        ("z".to_string(), Complex64::new(x, y)),
        ("i".to_string(), Complex64::i()),
        ("e".to_string(), Complex64::new(E, 0.0)),
        ("pi".to_string(), Complex64::new(PI, 0.0)),
    ])
}

/// An expression accepted for plotting.
///
/// Construction lowercases the input and evaluates it once at the origin, so
/// an expression using anything but the plot variables is rejected up front.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFunction {
    source: String,
    expr: Expr<Complex64>,
}

impl PlotFunction {
    pub fn new(text: &str, registry: &Registry<Complex64>) -> Result<Self, PlotError> {
        let source = text.to_lowercase();
        let expr = Expr::parse(&source, registry)?;
        expr.evaluate(&bindings(0.0, 0.0), registry)?;
        debug!("Accepted plot expression '{}'", source);
        Ok(Self { source, expr })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr<Complex64> {
        &self.expr
    }

    pub fn at(&self, x: f64, y: f64, registry: &Registry<Complex64>) -> Result<Complex64, EvalError> {
        self.expr.evaluate(&bindings(x, y), registry)
    }
}

/// The constant zero function.
impl Default for PlotFunction {
    fn default() -> Self {
        Self {
            source: "0".to_string(),
            expr: Expr::from(Node::Literal(Complex64::new(0.0, 0.0))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: Complex64,
}

/// `resolution x resolution` evenly spaced points covering
/// `[-axis_length, axis_length]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGrid {
    resolution: usize,
    axis_length: f64,
}

impl SurfaceGrid {
    pub fn new(resolution: usize, axis_length: f64) -> Result<Self, PlotError> {
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
            return Err(PlotError::InvalidResolution(resolution));
        }
        if !(axis_length.is_finite() && axis_length > 0.0) {
            return Err(PlotError::InvalidAxisLength(axis_length));
        }
        Ok(Self {
            resolution,
            axis_length,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn axis_length(&self) -> f64 {
        self.axis_length
    }

    pub fn len(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Never true: a grid has at least `MIN_RESOLUTION` points per side.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of grid line `index` along either axis.
    pub fn coordinate(&self, index: usize) -> f64 {
        -self.axis_length + 2.0 * index as f64 * self.axis_length / (self.resolution - 1) as f64
    }

    /// Evaluates `function` at every grid point in parallel. Samples are in
    /// row-major order with `x` varying fastest. The first evaluation error
    /// aborts the run.
    pub fn sample(
        &self,
        function: &PlotFunction,
        registry: &Registry<Complex64>,
    ) -> Result<Vec<Sample>, EvalError> {
        let start = Instant::now();

        let samples = (0..self.len())
            .into_par_iter()
            .map(|index| {
                let x = self.coordinate(index % self.resolution);
                let y = self.coordinate(index / self.resolution);
                function
                    .at(x, y, registry)
                    .map(|value| Sample { x, y, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Evaluated f(z)={}", function.source());
        info!(
            "Processed {} evaluations in {} µs",
            samples.len(),
            start.elapsed().as_micros()
        );
        Ok(samples)
    }
}
