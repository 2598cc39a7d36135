/// Trait alias for comparison functions.
pub trait Cmp<T>: FnMut(&T, &T) -> bool {}
impl<T, F: FnMut(&T, &T) -> bool> Cmp<T> for F {}

/// Helper function for the compiler to infer a closure as Cmp<T>.
#[inline]
pub fn cmp_from_closure<T, F>(f: F) -> F
where
    F: FnMut(&T, &T) -> bool,
{
    f
}

#[inline]
#[cold]
pub fn abort() -> ! {
    std::process::abort();
}

#[inline(always)]
pub fn assert_abort(b: bool) {
    if !b {
        abort();
    }
}

pub trait UnwrapAbort {
    type Inner;
    fn unwrap_abort(self) -> Self::Inner;
}

impl<T> UnwrapAbort for Option<T> {
    type Inner = T;

    #[inline]
    fn unwrap_abort(self) -> Self::Inner {
        if let Some(inner) = self {
            inner
        } else {
            abort()
        }
    }
}

impl<T, E> UnwrapAbort for Result<T, E> {
    type Inner = T;

    #[inline]
    fn unwrap_abort(self) -> Self::Inner {
        if let Ok(inner) = self {
            inner
        } else {
            abort()
        }
    }
}

/// Allocates a buffer of exactly `len` default-initialized elements. There is
/// no recovery from running out of memory here, we abort instead.
pub fn alloc_buffer<T: Copy + Default>(len: usize) -> Vec<T> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).unwrap_abort();
    buffer.resize(len, T::default());
    buffer
}
