//! Problem definition models: network entities, the network store, costs and constraints.

mod costs;
pub use self::costs::*;

mod definition;
pub use self::definition::*;

mod network;
pub use self::network::*;

mod store;
pub use self::store::{Network, NetworkStats};
