//! Core building blocks of the field value model.
//!
//! ### [`value`] - The Value enum
//!
//! The closed set of field kinds, factories, shared instances and accessors.
//!
//! ### [`kind`] - Kind classification
//!
//! [`ValueKind`] discriminators, persisted codes, and the [`TypeOrder`] rank
//! that orders kinds which cannot be compared by value.
//!
//! ### [`order`] and [`hash`]
//!
//! The total order, the equality derived from it, and a hash consistent with
//! that equality.
//!
//! ### [`limits`] - Size bounds
//!
//! [`ValueLimits`] configuration and recursive validation.
pub mod display;
pub mod hash;
pub mod kind;
pub mod limits;
pub mod order;
pub mod value;

pub use kind::{TypeOrder, ValueKind};
pub use limits::ValueLimits;
pub use value::Value;
