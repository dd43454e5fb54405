//! Use-Cases rund ums Zeichnen von Strokes.

mod begin_stroke;
mod extend_stroke;
mod finish_stroke;

pub use begin_stroke::begin_stroke;
pub use extend_stroke::extend_stroke;
pub use finish_stroke::finish_stroke;
