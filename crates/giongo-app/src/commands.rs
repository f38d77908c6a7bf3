pub mod generate;
pub mod sort;
