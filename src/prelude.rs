//! Derive macros shared by the field and expression types.

pub use derive_more::Deref;
