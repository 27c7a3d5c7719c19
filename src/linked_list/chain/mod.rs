//! # Owning Chain
//!
//! A singly linked list in which every link owns its successor.
//!
//! ## Core Components
//!
//! - [`list::Chain`]: the container. It holds the only owning edge to the first link.
//! - [`traits::OrderedList`]: the ordered-list contract, also implemented by the
//!   standard [`LinkedList`](alloc::collections::LinkedList) of `Option<T>` in [`reference`].
//! - [`iter`]: borrowing and owning iterators in insertion order.
//!
//! ## Cost model
//!
//! There is no cached length and no tail pointer. [`Chain::len`] walks the
//! chain, and so does every bounds check; appending walks to the last link.
//! Only [`Chain::is_empty`], [`Chain::first`], [`Chain::push_front`] and
//! [`Chain::pop_front`] are O(1).

mod link;

pub mod iter;
pub mod list;
pub mod reference;
pub mod traits;

pub use list::Chain;

#[cfg(test)]
mod tests;
