#![allow(non_snake_case)]

mod body;
mod glyph;
mod init;
mod pages;
mod root;

pub use body::Body;
pub use root::{Shell, ShellContext};
