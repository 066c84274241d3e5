//! A set of utility structs and functions used when operating the core.

pub mod time;
