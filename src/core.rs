// src/core.rs
pub mod calendar;
pub mod display;
pub mod extract;
pub mod scanner;
