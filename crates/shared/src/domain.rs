use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    sync::Arc,
};

use serde::{Deserialize, Serialize};

/// Handle to caller-owned page content.
///
/// Two handles are equal only when they point at the same allocation; the
/// content itself is never compared.
pub struct PageHandle<P: ?Sized>(Arc<P>);

impl<P> PageHandle<P> {
    pub fn new(content: P) -> Self {
        Self(Arc::new(content))
    }
}

impl<P: ?Sized> PageHandle<P> {
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl<P: ?Sized> Clone for PageHandle<P> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<P: ?Sized> PartialEq for PageHandle<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<P: ?Sized> Eq for PageHandle<P> {}

impl<P: ?Sized> Hash for PageHandle<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<P: ?Sized> Deref for PageHandle<P> {
    type Target = P;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<P: ?Sized> From<Arc<P>> for PageHandle<P> {
    fn from(value: Arc<P>) -> Self {
        Self(value)
    }
}

impl<P: ?Sized> fmt::Debug for PageHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PageHandle").field(&self.addr()).finish()
    }
}

/// Which way the container animates toward the displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationDirection {
    #[default]
    Forward,
    Reverse,
}

impl NavigationDirection {
    pub fn toward(current: usize, target: usize) -> Self {
        if target < current {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisplayTicket(pub u64);

impl fmt::Display for DisplayTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_identity_not_content() {
        let a = PageHandle::new(String::from("page"));
        let b = PageHandle::new(String::from("page"));

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(*a, *b);
    }

    #[test]
    fn unsized_handles_share_identity_through_arc() {
        let content: Arc<str> = Arc::from("cover");
        let a = PageHandle::from(Arc::clone(&content));
        let b = PageHandle::from(content);

        assert_eq!(a, b);
        assert_eq!(&*a, "cover");
    }

    #[test]
    fn direction_points_backwards_only_for_lower_targets() {
        assert_eq!(NavigationDirection::toward(2, 0), NavigationDirection::Reverse);
        assert_eq!(NavigationDirection::toward(0, 2), NavigationDirection::Forward);
        assert_eq!(NavigationDirection::toward(1, 1), NavigationDirection::Forward);
    }
}
