pub mod batch;
pub mod config;
pub mod error;
pub mod geometry;
pub mod imaging;
pub mod report;
pub mod scorer;
pub mod session;

pub use error::{PgResult, PhiError};
pub use scorer::{evaluate, Measurement, Scorer, Status, GOLDEN_RATIO};
// cmd and reports belong to the binary crate (main.rs).
