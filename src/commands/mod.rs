//! Command implementations for the dh-cmake CLI

pub mod completions;
pub mod cpack;
pub mod ctest;
pub mod helpers;
pub mod install;
