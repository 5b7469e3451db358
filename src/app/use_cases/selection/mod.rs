//! Use-Cases für Auswahl und Caret-Navigation.

mod caret;
mod pick;

pub use caret::move_caret;
pub use pick::select_at;
