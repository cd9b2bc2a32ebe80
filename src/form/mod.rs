pub mod field;
pub mod selection;
pub mod store;

pub use field::*;
pub use selection::*;
pub use store::*;
