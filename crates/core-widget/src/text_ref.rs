//! Shared handle to an externally owned text buffer.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A cloneable handle to a `String` owned jointly by the host and the
/// controls it configures. Borrows are held only for the duration of one
/// call; nothing keeps a `Ref` across events.
#[derive(Clone, Default)]
pub struct TextRef(Rc<RefCell<String>>);

impl TextRef {
    pub fn new(s: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(s.into())))
    }

    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn set(&self, s: impl Into<String>) {
        *self.0.borrow_mut() = s.into();
    }

    pub fn borrow(&self) -> Ref<'_, String> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, String> {
        self.0.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Both handles point at the same buffer.
    pub fn ptr_eq(&self, other: &TextRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&str> for TextRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TextRef {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// Length only; the buffer may hold a password.
impl fmt::Debug for TextRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRef").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let a = TextRef::new("ab");
        let b = a.clone();
        b.borrow_mut().push('c');
        assert_eq!(a.get(), "abc");
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&TextRef::new("abc")));
    }

    #[test]
    fn debug_hides_content() {
        let t = TextRef::new("hunter2");
        let dbg = format!("{t:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("7"));
    }
}
