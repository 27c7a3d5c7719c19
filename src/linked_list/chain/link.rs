use alloc::boxed::Box;

/// An owning edge to the next link, or the end of the chain.
pub(crate) type Edge<T> = Option<Box<Link<T>>>;

/// A link in a singly linked chain.
///
/// The slot may be absent (`None`) while the link itself exists.
pub(crate) struct Link<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Edge<T>,
}

impl<T> Link<T> {
    #[inline]
    pub(crate) fn new(value: Option<T>, next: Edge<T>) -> Box<Self> {
        Box::new(Link { value, next })
    }

    /// Absent-aware slot match: `None` matches only `None`.
    #[inline]
    pub(crate) fn matches(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        self.value.as_ref() == value
    }
}

/// Unlinks every node reachable from `edge` one at a time.
///
/// Dropping a `Box<Link<T>>` directly would recurse once per link.
pub(crate) fn unlink_all<T>(edge: &mut Edge<T>) {
    let mut current = edge.take();
    while let Some(mut link) = current {
        current = link.next.take();
    }
}
