//! Native handle bookkeeping.
//!
//! Every wrapper keeps its native pointer in a [`RawHandle`]. Deleting or
//! freeing the object clears the pointer, so a later call reports
//! [`Error::Released`] instead of handing a dangling pointer to the library.
//!
//! Nothing here frees native memory on drop. The library's own lifetime rules
//! (menus before items, forms before fields, screens in reverse order) cannot
//! be expressed by ownership alone, so release stays explicit. [`Scoped`] is
//! the opt-in guard for releasing a handle on every exit path of a block.

use std::cell::Cell;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};

/// A native pointer that becomes invalid once released.
///
/// Holding a raw pointer makes every wrapper `!Send` and `!Sync`; the native
/// library is not thread-safe and must be driven from one thread.
pub(crate) struct RawHandle<T> {
    ptr: Cell<*mut T>,
    kind: &'static str,
}

impl<T> RawHandle<T> {
    pub(crate) fn new(ptr: *mut T, kind: &'static str) -> Self {
        Self {
            ptr: Cell::new(ptr),
            kind,
        }
    }

    /// The live pointer, or `Error::Released`.
    pub(crate) fn get(&self) -> Result<*mut T> {
        let ptr = self.ptr.get();
        if ptr.is_null() {
            Err(Error::Released(self.kind))
        } else {
            Ok(ptr)
        }
    }

    /// Take the pointer out, leaving the handle released.
    pub(crate) fn take(&self) -> Result<*mut T> {
        let ptr = self.get()?;
        self.ptr.set(std::ptr::null_mut());
        Ok(ptr)
    }

    /// Put a pointer back after a failed release so the caller can retry.
    pub(crate) fn restore(&self, ptr: *mut T) {
        self.ptr.set(ptr);
    }

    pub(crate) fn is_released(&self) -> bool {
        self.ptr.get().is_null()
    }

    /// The raw pointer, null if released.
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.get()
    }
}

impl<T> fmt::Debug for RawHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_released() {
            write!(f, "{}(released)", self.kind)
        } else {
            write!(f, "{}({:p})", self.kind, self.ptr.get())
        }
    }
}

/// A wrapper whose native object can be released explicitly.
pub trait Release {
    /// Release the native object (delete, free, or end and delete).
    fn release(&self) -> Result<()>;
}

/// Releases the wrapped handle when the guard leaves scope.
///
/// Errors during the implicit release are logged at `warn` level since
/// `Drop` cannot return them. Call [`Scoped::finish`] to release explicitly
/// and observe the result, or [`Scoped::into_inner`] to keep the handle.
///
/// ```rust,no_run
/// use ncurses::{Scoped, Window};
///
/// fn draw() -> ncurses::Result<()> {
///     let win = Scoped::new(Window::new(5, 20, 2, 2)?);
///     win.print("inside")?;
///     win.refresh()?;
///     Ok(())
/// } // deleted here, even if a call above failed
/// ```
pub struct Scoped<T: Release> {
    inner: Option<T>,
}

impl<T: Release> Scoped<T> {
    /// Guard `inner`.
    pub fn new(inner: T) -> Self {
        Self { inner: Some(inner) }
    }

    /// Release now, returning the result.
    pub fn finish(mut self) -> Result<()> {
        match self.inner.take() {
            Some(inner) => inner.release(),
            None => Ok(()),
        }
    }

    /// Disarm the guard and hand the handle back.
    pub fn into_inner(mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T: Release> Deref for Scoped<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // inner is only None after finish/into_inner, which consume self
        match &self.inner {
            Some(inner) => inner,
            None => unreachable!("scoped handle accessed after release"),
        }
    }
}

impl<T: Release> DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.inner {
            Some(inner) => inner,
            None => unreachable!("scoped handle accessed after release"),
        }
    }
}

impl<T: Release> Drop for Scoped<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            if let Err(err) = inner.release() {
                log::warn!("scoped release failed: {}", err);
            }
        }
    }
}

impl<T: Release + fmt::Debug> fmt::Debug for Scoped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scoped").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Counted {
        released: Rc<Cell<u32>>,
        fail: bool,
    }

    impl Release for Counted {
        fn release(&self) -> Result<()> {
            self.released.set(self.released.get() + 1);
            if self.fail {
                Err(Error::Failed { call: "test" })
            } else {
                Ok(())
            }
        }
    }

    fn counted(fail: bool) -> (Counted, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        (
            Counted {
                released: released.clone(),
                fail,
            },
            released,
        )
    }

    #[test]
    fn test_raw_handle_take_then_get() {
        let mut value = 7u8;
        let handle = RawHandle::new(&mut value as *mut u8, "Window");
        assert!(handle.get().is_ok());
        assert!(handle.take().is_ok());
        assert!(handle.is_released());
        assert_eq!(handle.get(), Err(Error::Released("Window")));
        assert_eq!(handle.take(), Err(Error::Released("Window")));
        assert_eq!(format!("{:?}", handle), "Window(released)");
    }

    #[test]
    fn test_scoped_releases_on_drop() {
        let (c, released) = counted(false);
        {
            let _guard = Scoped::new(c);
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_scoped_releases_on_early_return() {
        fn work(c: Counted, bail: bool) -> Result<()> {
            let _guard = Scoped::new(c);
            if bail {
                return Err(Error::Failed { call: "wrefresh" });
            }
            Ok(())
        }
        let (c, released) = counted(false);
        assert!(work(c, true).is_err());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_scoped_finish_reports_error_once() {
        let (c, released) = counted(true);
        let guard = Scoped::new(c);
        assert!(guard.finish().is_err());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_scoped_into_inner_disarms() {
        let (c, released) = counted(false);
        let inner = Scoped::new(c).into_inner();
        assert!(inner.is_some());
        assert_eq!(released.get(), 0);
    }
}
