pub mod model;

pub use model::{BuildSummary, FormData};
