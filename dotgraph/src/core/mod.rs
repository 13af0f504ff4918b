//! A module contain the interfaces, utilities and data-structures that are shared by the other
//! modules.

pub mod attr;
pub mod constants;
pub mod error;
pub mod quote;
pub mod utils;
