pub mod daemon;
pub mod models;
pub mod scanner;
