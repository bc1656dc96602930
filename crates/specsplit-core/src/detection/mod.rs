pub mod config;
pub mod highlight;
pub mod morphology;
pub mod splits;
pub mod threshold;

pub use config::{HighlightParams, Scale};
pub use highlight::highlight_transition;
pub use splits::{choose_split, find_split_columns, SplitDecision};
