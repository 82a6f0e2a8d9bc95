pub mod deformer;
pub use deformer::*;
