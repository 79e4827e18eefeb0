//! Scans a cubic for all of its roots, refines one of them with the
//! hybrid solver, and plots the function with the discovered roots.

use zeroin_plot::PlotApp;
use zeroin_solve::{bisection, hybrid, scan};

fn main() {
    let f = |x: f64| x * x * x - 4.0 * x;
    let df = |x: f64| 3.0 * x * x - 4.0;

    let scan_config = bisection::Config::new(500, 1e-9, 0.0, 0.0).unwrap();
    let roots = scan::find_roots(f, [-3.0, 3.0], 25, &scan_config).unwrap();
    println!("roots found by scanning: {roots:?}");

    let config = hybrid::Config::default();
    let solution = hybrid::solve_unobserved(f, Some(df), [1.0, 3.0], &config).unwrap();
    println!(
        "hybrid refinement: x = {}, residual = {}, {} iterations",
        solution.x, solution.residual, solution.iters
    );
    for step in &solution.steps {
        println!(
            "  iter {:>2} [{:?}]: x = {:.15}, f(x) = {:+.3e}",
            step.iter, step.kind, step.x, step.residual
        );
    }

    let app = PlotApp::new()
        .add_function("x³ - 4x", f, [-3.0, 3.0], 400)
        .add_roots("roots", &roots, f);

    app.run("Root comparison").unwrap();
}
