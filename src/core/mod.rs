pub mod encoder;
pub mod engine;
pub mod identifier;
pub mod pipeline;
pub mod scanner;

pub use crate::domain::model::{ImageFile, ObjcDeclaration};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
