//! Common models shared by problem and solution domains.

mod domain;
pub use self::domain::Coordinates;

mod primitives;
pub use self::primitives::*;
