pub mod ads;
pub mod backup;
pub mod catalog;
pub mod core;
pub mod export;
pub mod plan;
pub mod setup;
