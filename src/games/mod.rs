//! Game implementations.

pub mod abalone;
