//! Models which represent a computed transportation route.

mod route;
pub use self::route::*;
