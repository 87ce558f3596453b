#![doc = include_str!("../README.md")]

extern crate alloc;

mod config;
mod content;
mod element;
mod template;

pub use self::{
    config::*,
    content::Content,
    element::{DEFAULT_SELF_CLOSERS, Element},
    template::ElementTemplate,
};
