// Markd storage layer
// One shared key/value container addressable by both the extension and the
// app process; values are whole JSON documents overwritten as a unit.

pub mod shared_store;

pub use shared_store::{SharedContainerStore, SharedStore};
