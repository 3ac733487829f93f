pub mod batch;
pub mod measure;
