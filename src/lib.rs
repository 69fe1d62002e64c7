// Library exports for findtier
pub mod config;
pub mod finder;
pub mod manifest;
pub mod output;
pub mod probe;
pub mod walker;
