pub mod classify;
pub mod error;
pub mod generation;
pub mod language;
pub mod preprocess;
pub mod sort;
