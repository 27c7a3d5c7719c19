//! Linked list implementations.
//!
//! [`chain::Chain`] is a singly linked list whose links own their successors.
//! Elements are stored as `Option<T>`, so an absent value is a regular element.
//!
//! # Examples
//!
//! ```
//! use mola_chain::linked_list::chain::Chain;
//!
//! let mut chain = Chain::<i32>::new();
//! chain.push(10);
//! chain.push(None);
//! chain.push(30);
//!
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.get(0), Ok(Some(&10)));
//! assert_eq!(chain.index_of(None), Some(1));
//! assert_eq!(chain.to_string(), "[10, null, 30]");
//!
//! chain.insert(1, 20).unwrap();
//! assert_eq!(chain.remove(2), Ok(None));
//! assert_eq!(chain.to_string(), "[10, 20, 30]");
//! assert!(chain.get(3).is_err());
//! ```
pub mod chain;
