//! Use-Cases: die eigentlichen Mutationsschritte der Engine.

pub mod drawing;
pub mod erasing;
