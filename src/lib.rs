#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{ChainError, Result};
pub use linked_list::chain::{Chain, traits::OrderedList};
