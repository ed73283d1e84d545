//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`]: 2-opt segment reversal to a local optimum

mod two_opt;

pub use two_opt::{
    reverse_segment, tour_distance, two_opt_delta, two_opt_improve, two_opt_improve_with,
    ImprovementStrategy, TwoOptOptions, TwoOptOutcome,
};
