//! Type definitions

pub mod combination;
pub mod leg;

pub use combination::*;
pub use leg::*;
