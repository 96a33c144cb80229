//! Beam Solver - closed-form analysis of simply-supported beams
//!
//! Shear, bending moment, slope and deflection are evaluated anywhere along
//! a simply-supported beam using Macaulay's singularity-function method.
//! Loads are superposed analytically; there is no mesh and no iterative
//! solve. Supported loads:
//! - Point forces and point moments
//! - Piecewise-linear distributed forces
//! - Piecewise-constant distributed moments
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! // 0.3 m x 0.6 m concrete beam spanning 10 m
//! let i = 0.3 * 0.6_f64.powi(3) / 12.0;
//!
//! // 10 kN downward at midspan
//! let loads = LoadAssembly::builder().point_force(-10.0, 5.0).build();
//! let model = AnalysisModel::new(10.0, 32e9, i, loads).unwrap();
//!
//! let engine = model.engine();
//! let midspan_moment = engine.moment(5.0).unwrap();
//! assert!((midspan_moment + 25.0).abs() < 1e-10);
//!
//! // Sample the whole span
//! let diagram = engine.diagram(&AnalysisOptions::default()).unwrap();
//! assert!(diagram.summary.max_deflection.value > 0.0);
//! ```

pub mod analysis;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, ResponseDiagram, ResponseEngine};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{LoadAssembly, LoadAssemblyBuilder, LoadInstance, LoadSegmentSeries};
    pub use crate::model::AnalysisModel;
    pub use crate::results::{BoundaryConstants, DiagramSummary, Extreme, ResponseValues};
}
