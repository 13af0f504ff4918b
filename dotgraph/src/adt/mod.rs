//! Data structures that are used by the object model.

pub mod multimap;
