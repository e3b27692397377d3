//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod address;
mod constructor_arg;
mod stage;

pub use address::Address;
pub use constructor_arg::ConstructorArg;
pub use stage::Stage;
