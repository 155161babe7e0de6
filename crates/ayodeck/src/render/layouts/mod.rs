pub mod bullets;
pub mod demo;
pub mod diagram;
pub mod title;
