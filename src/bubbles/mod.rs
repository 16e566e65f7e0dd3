pub mod bubble;
pub mod pack;
pub mod scale;
