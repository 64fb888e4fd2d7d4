pub mod formatting;
pub mod random;
pub mod selection;
