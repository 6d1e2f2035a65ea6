// synmark/src/commands/mod.rs
pub mod annotate;
