pub mod create;
pub mod demo;
pub mod key;
pub mod print;
