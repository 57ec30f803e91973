/// An owning reference to the rest of a chain, starting with the node it points to.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }

    /// Follows `count` links from `link`, returning the link found there, or [`None`] if the chain
    /// ends first.
    pub fn follow(mut link: &mut Link<T>, count: usize) -> Option<&mut Link<T>> {
        for _ in 0..count {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Consumes the node, returning its value and the chain that followed it.
    pub fn into_parts(self: Box<Self>) -> (T, Link<T>) {
        let Node { value, next } = *self;
        (value, next)
    }
}
