//! Icon set generation for mobile and desktop platforms.

pub mod bundle;
pub mod catalog;
pub mod generate;
pub mod runner;
