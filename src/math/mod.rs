pub mod checker;
pub mod hex;
pub mod suggest;
pub mod wcag;
