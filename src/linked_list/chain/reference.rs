//! [`OrderedList`] over the standard doubly linked list.
//!
//! Used as the reference implementation that a [`Chain`](super::Chain) is
//! checked and measured against.

use alloc::collections::LinkedList;
use core::mem;

use crate::error::{ChainError, Result};

use super::traits::OrderedList;

impl<T: PartialEq> OrderedList<T> for LinkedList<Option<T>> {
    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn push(&mut self, value: Option<T>) {
        self.push_back(value);
    }

    fn insert(&mut self, index: usize, value: Option<T>) -> Result<()> {
        let len = LinkedList::len(self);
        if index > len {
            return Err(ChainError::out_of_range("insert", index, len));
        }
        let mut tail = self.split_off(index);
        self.push_back(value);
        self.append(&mut tail);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>> {
        let len = LinkedList::len(self);
        if index >= len {
            return Err(ChainError::out_of_range("remove", index, len));
        }
        let mut tail = self.split_off(index);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed.ok_or(ChainError::OutOfRange { index, len })
    }

    fn remove_value(&mut self, value: Option<&T>) -> bool {
        match OrderedList::index_of(self, value) {
            Some(index) => OrderedList::remove(self, index).is_ok(),
            None => false,
        }
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    fn get(&self, index: usize) -> Result<Option<&T>> {
        let len = LinkedList::len(self);
        if index >= len {
            return Err(ChainError::out_of_range("get", index, len));
        }
        self.iter()
            .nth(index)
            .map(Option::as_ref)
            .ok_or(ChainError::OutOfRange { index, len })
    }

    fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>> {
        let len = LinkedList::len(self);
        if index >= len {
            return Err(ChainError::out_of_range("set", index, len));
        }
        let slot = self
            .iter_mut()
            .nth(index)
            .ok_or(ChainError::OutOfRange { index, len })?;
        Ok(mem::replace(slot, value))
    }

    fn contains(&self, value: Option<&T>) -> bool {
        self.iter().any(|slot| slot.as_ref() == value)
    }

    fn index_of(&self, value: Option<&T>) -> Option<usize> {
        self.iter().position(|slot| slot.as_ref() == value)
    }

    fn last_index_of(&self, value: Option<&T>) -> Option<usize> {
        self.iter().rposition(|slot| slot.as_ref() == value)
    }
}
