pub mod cards;
pub mod public;
