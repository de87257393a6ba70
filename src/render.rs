// src/render.rs
pub mod markup;
pub mod report;

pub use markup::{Markup, escape};
pub use report::{BlockSpec, BlockStyle, render_agenda, render_block, render_dashboard};
