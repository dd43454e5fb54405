//! Use-Cases rund ums Radieren.

mod erase_partial;
mod erase_stroke;

pub use erase_partial::erase_partial_at;
pub use erase_stroke::erase_stroke_at;
