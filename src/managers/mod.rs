// Markd collection managers
// Managers own the read-modify-write cycles over the shared store: the
// app-side bookmark and folder stores, and the extension-side share writer.

pub mod bookmark_store;
pub mod folder_store;
pub mod share_writer;
