use core::{
    fmt,
    hash::{Hash, Hasher},
    mem, ptr,
};

use crate::error::{ChainError, Result};

use super::{
    iter::{IntoIter, Iter, IterMut},
    link::{Edge, Link, unlink_all},
};

/// A singly linked, strictly owning ordered list.
///
/// Every slot holds an `Option<T>`: an absent element is a real element of the
/// chain, distinct from the end of the chain. The length is not stored, so
/// [`Chain::len`] and every bounds check walk the whole chain.
pub struct Chain<T> {
    head: Edge<T>,
}

impl<T> Chain<T> {
    /// Creates a new, empty chain.
    pub const fn new() -> Self {
        Chain { head: None }
    }

    /// Returns `true` if the chain holds no links. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the links reachable from the head. O(n).
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head.as_deref();
        while let Some(link) = current {
            count += 1;
            current = link.next.as_deref();
        }
        count
    }

    /// Appends a value after the last link.
    pub fn push(&mut self, value: impl Into<Option<T>>) {
        *self.tail_mut() = Some(Link::new(value.into(), None));
    }

    /// Inserts a value in front of the head. O(1).
    pub fn push_front(&mut self, value: impl Into<Option<T>>) {
        let next = self.head.take();
        self.head = Some(Link::new(value.into(), next));
    }

    /// Detaches the head link and returns its slot.
    ///
    /// The outer `None` means the chain was empty.
    pub fn pop_front(&mut self) -> Option<Option<T>> {
        self.head.take().map(|link| {
            let Link { value, next } = *link;
            self.head = next;
            value
        })
    }

    /// Inserts a value so that it ends up at `index`.
    ///
    /// Valid indices are `0..=len`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(ChainError::out_of_range("insert", index, len));
        }
        let edge = self
            .edge_at_mut(index)
            .ok_or(ChainError::OutOfRange { index, len })?;
        let next = edge.take();
        *edge = Some(Link::new(value.into(), next));
        Ok(())
    }

    /// Removes the link at `index` and returns its slot.
    pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
        let len = self.check_element_index("remove", index)?;
        let edge = self
            .edge_at_mut(index)
            .ok_or(ChainError::OutOfRange { index, len })?;
        let removed = edge.take().ok_or(ChainError::OutOfRange { index, len })?;
        let Link { value, next } = *removed;
        *edge = next;
        Ok(value)
    }

    /// Removes the first link whose slot matches `value`.
    ///
    /// Returns `false` and leaves the chain untouched if nothing matches.
    pub fn remove_value(&mut self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let Some(edge) = self.edge_matching_mut(value) else {
            return false;
        };
        match edge.take() {
            Some(removed) => {
                *edge = removed.next;
                true
            }
            None => false,
        }
    }

    /// Drops every link.
    pub fn clear(&mut self) {
        tracing::trace!("clearing chain");
        unlink_all(&mut self.head);
    }

    /// Returns the head slot without walking the chain.
    ///
    /// The outer `None` means the chain is empty.
    pub fn first(&self) -> Option<Option<&T>> {
        self.head.as_deref().map(|link| link.value.as_ref())
    }

    /// Returns the slot at `index`.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        let len = self.check_element_index("get", index)?;
        self.link_at(index)
            .map(|link| link.value.as_ref())
            .ok_or(ChainError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`, if present.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        let len = self.check_element_index("get_mut", index)?;
        self.link_at_mut(index)
            .map(|link| link.value.as_mut())
            .ok_or(ChainError::OutOfRange { index, len })
    }

    /// Replaces the slot at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<Option<T>> {
        let len = self.check_element_index("set", index)?;
        let link = self
            .link_at_mut(index)
            .ok_or(ChainError::OutOfRange { index, len })?;
        Ok(mem::replace(&mut link.value, value.into()))
    }

    pub fn contains(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|slot| slot == value)
    }

    /// Position of the first slot matching `value`.
    pub fn index_of(&self, value: Option<&T>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|slot| slot == value)
    }

    /// Position of the last slot matching `value`, found in one forward pass.
    pub fn last_index_of(&self, value: Option<&T>) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut last = None;
        for (index, slot) in self.iter().enumerate() {
            if slot == value {
                last = Some(index);
            }
        }
        last
    }

    /// Iterates over the slots in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    /// Iterates over mutable slots in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut())
    }

    fn check_element_index(&self, op: &'static str, index: usize) -> Result<usize> {
        let len = self.len();
        if index < len {
            Ok(len)
        } else {
            Err(ChainError::out_of_range(op, index, len))
        }
    }

    fn link_at(&self, index: usize) -> Option<&Link<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    /// The edge that owns the link at `index`; `index == len` yields the trailing edge.
    fn edge_at_mut(&mut self, index: usize) -> Option<&mut Edge<T>> {
        let mut edge = &mut self.head;
        for _ in 0..index {
            edge = &mut edge.as_mut()?.next;
        }
        Some(edge)
    }

    fn tail_mut(&mut self) -> &mut Edge<T> {
        let mut edge = &mut self.head;
        while let Some(link) = edge {
            edge = &mut link.next;
        }
        edge
    }

    fn edge_matching_mut(&mut self, value: Option<&T>) -> Option<&mut Edge<T>>
    where
        T: PartialEq,
    {
        let mut edge = &mut self.head;
        loop {
            let found = match edge.as_deref() {
                Some(link) => link.matches(value),
                None => return None,
            };
            if found {
                return Some(edge);
            }
            match edge {
                Some(link) => edge = &mut link.next,
                None => return None,
            }
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        unlink_all(&mut self.head);
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        self.iter().map(|slot| slot.cloned()).collect()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    /// Walks both chains in lock-step and stops at the first difference.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: Hash> Hash for Chain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0usize;
        for slot in self.iter() {
            slot.hash(state);
            count += 1;
        }
        state.write_usize(count);
    }
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, slot) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => fmt::Display::fmt(value, f)?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<Option<T>> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let mut chain = Chain::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<Option<T>> for Chain<T> {
    fn extend<I: IntoIterator<Item = Option<T>>>(&mut self, iter: I) {
        let mut edge = self.tail_mut();
        for value in iter {
            let link = edge.insert(Link::new(value, None));
            edge = &mut link.next;
        }
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Chain<T> {
    type Item = &'a mut Option<T>;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
