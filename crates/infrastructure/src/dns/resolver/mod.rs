pub mod iterative;
pub mod state;

pub use iterative::IterativeResolver;
pub use state::{ResolutionState, Step, Target};
