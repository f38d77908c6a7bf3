pub mod completion;
pub mod frequency;
pub mod generator;
pub mod loader;

pub use completion::OpenAiCompletion;
pub use frequency::FrequencyTable;
pub use generator::{ExampleGenerator, example_schema};
pub use loader::FrequencyLoader;
