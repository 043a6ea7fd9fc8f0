//! French-locale euro formatting.

mod euro;

pub use euro::format_eur;
