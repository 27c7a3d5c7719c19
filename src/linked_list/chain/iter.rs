use core::iter::FusedIterator;

use super::{Chain, link::Link};

/// An iterator over the slots of a chain.
pub struct Iter<'a, T> {
    next: Option<&'a Link<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Link<T>>) -> Self {
        Self { next: head }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            self.next = link.next.as_deref();
            link.value.as_ref()
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

/// An iterator over mutable slots of a chain.
///
/// Slots may be overwritten, including with `None`; the links themselves stay in place.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Link<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: Option<&'a mut Link<T>>) -> Self {
        Self { next: head }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|link| {
            self.next = link.next.as_deref_mut();
            &mut link.value
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator that detaches links from the front.
pub struct IntoIter<T> {
    chain: Chain<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(chain: Chain<T>) -> Self {
        Self { chain }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
