/// UI layer: panel chrome and the convergence plot.

pub mod panels;
pub mod plot;
