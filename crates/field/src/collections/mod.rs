//! Recursive collection payloads

pub mod array;
pub mod object;

pub use array::Array;
pub use object::Object;
