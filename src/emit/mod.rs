mod json;

pub use json::{MappingOutput, OutlineOutput};
