// synmark-core/src/engines/mod.rs
//! Concrete implementations of the `AnnotationEngine` trait.

pub mod regex_engine;
