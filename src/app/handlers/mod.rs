//! Feature-Handler: duenne Dispatch-Schicht zwischen Controller und Use-Cases.

pub mod drawing;
pub mod erasing;
pub mod tooling;
