use crate::error::Result;

use super::Chain;

/// The ordered-list contract shared by [`Chain`] and the reference list.
///
/// Slots are `Option<T>`; value lookups match `None` against `None` only.
/// Indexed operations accept `0..len`, except [`OrderedList::insert`] which
/// also accepts `len`.
pub trait OrderedList<T> {
    /// Check if the list is empty
    fn is_empty(&self) -> bool;

    /// Get the number of elements in the list
    fn len(&self) -> usize;

    /// Append an element to the end of the list
    fn push(&mut self, value: Option<T>);

    /// Insert an element so that it ends up at `index`
    fn insert(&mut self, index: usize, value: Option<T>) -> Result<()>;

    /// Remove the element at `index`
    fn remove(&mut self, index: usize) -> Result<Option<T>>;

    /// Remove the first element matching `value`
    fn remove_value(&mut self, value: Option<&T>) -> bool;

    /// Remove every element
    fn clear(&mut self);

    /// Get the element at `index`
    fn get(&self, index: usize) -> Result<Option<&T>>;

    /// Replace the element at `index`, returning the previous one
    fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>>;

    /// Check if some element matches `value`
    fn contains(&self, value: Option<&T>) -> bool;

    /// Get the position of the first element matching `value`
    fn index_of(&self, value: Option<&T>) -> Option<usize>;

    /// Get the position of the last element matching `value`
    fn last_index_of(&self, value: Option<&T>) -> Option<usize>;
}

impl<T: PartialEq> OrderedList<T> for Chain<T> {
    fn is_empty(&self) -> bool {
        Chain::is_empty(self)
    }

    fn len(&self) -> usize {
        Chain::len(self)
    }

    fn push(&mut self, value: Option<T>) {
        Chain::push(self, value);
    }

    fn insert(&mut self, index: usize, value: Option<T>) -> Result<()> {
        Chain::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>> {
        Chain::remove(self, index)
    }

    fn remove_value(&mut self, value: Option<&T>) -> bool {
        Chain::remove_value(self, value)
    }

    fn clear(&mut self) {
        Chain::clear(self);
    }

    fn get(&self, index: usize) -> Result<Option<&T>> {
        Chain::get(self, index)
    }

    fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>> {
        Chain::set(self, index, value)
    }

    fn contains(&self, value: Option<&T>) -> bool {
        Chain::contains(self, value)
    }

    fn index_of(&self, value: Option<&T>) -> Option<usize> {
        Chain::index_of(self, value)
    }

    fn last_index_of(&self, value: Option<&T>) -> Option<usize> {
        Chain::last_index_of(self, value)
    }
}
