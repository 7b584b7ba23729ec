pub mod cards;
pub mod passwords;
