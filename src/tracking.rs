#![allow(dead_code)]

//! Records what the sort does to its buffers, for tests and visualization.
//!
//! Only compiled in with the `tracking` feature; otherwise every hook is an
//! inlined no-op.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub buffer: &'static str,
    pub idx: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// A single comparator call.
    Compare { lhs: Location, rhs: Location },

    /// A range of at most `SMALL_SORT` elements was sorted directly.
    TinySort { begin: usize, len: usize },

    /// The four sorted quarters of a range were already in order.
    AlreadySorted { begin: usize, len: usize },

    /// The four sorted quarters were in strictly descending block order and
    /// got reordered by rotation.
    Rotation { begin: usize, len: usize },

    /// Two adjacent runs were merged with the parity merge.
    ParityMerge { left: usize, right: usize },

    /// The work stack doubled to this many frames.
    StackGrowth { frames: usize },
}

#[cfg(feature = "tracking")]
mod tracking_impl {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct TrackingRegister {
        known_buffers: HashMap<&'static str, (usize, usize)>,
        ops: Vec<Operation>,
    }

    impl TrackingRegister {
        pub fn register_buffer<T>(&mut self, name: &'static str, buf: &[T]) {
            let range = buf.as_ptr_range();
            let old = self
                .known_buffers
                .insert(name, (range.start as usize, range.end as usize));
            assert!(old.is_none(), "duplicate buffer {name}");
        }

        pub fn deregister_buffer(&mut self, name: &'static str) -> (usize, usize) {
            let old = self.known_buffers.remove(name);
            assert!(old.is_some(), "unknown buffer {name}");
            old.unwrap()
        }

        fn locate<T>(&self, ptr: *const T) -> Option<Location> {
            let iptr = ptr as usize;
            for (buf, (begin, end)) in self.known_buffers.iter() {
                if (*begin..*end).contains(&iptr) {
                    return Some(Location {
                        buffer: *buf,
                        idx: (iptr - begin) / std::mem::size_of::<T>(),
                    });
                }
            }
            None
        }
    }

    lazy_static::lazy_static! {
        static ref TRACKING_REGISTER: Mutex<TrackingRegister> = {
            Mutex::new(TrackingRegister::default())
        };
    }

    pub fn read_tracked_ops() -> Vec<Operation> {
        let mut register = TRACKING_REGISTER.lock().unwrap();
        assert!(register.known_buffers.is_empty());
        core::mem::take(&mut register.ops)
    }

    pub fn register_buffer<T>(name: &'static str, buf: &[T]) {
        let mut register = TRACKING_REGISTER.lock().unwrap();
        register.register_buffer(name, buf);
    }

    pub fn deregister_buffer(name: &'static str) {
        let mut register = TRACKING_REGISTER.lock().unwrap();
        register.deregister_buffer(name);
    }

    pub fn register_cmp<T>(left: *const T, right: *const T) {
        let mut register = TRACKING_REGISTER.lock().unwrap();
        let lhs = register.locate(left).expect("unregistered cmp lhs");
        let rhs = register.locate(right).expect("unregistered cmp rhs");
        register.ops.push(Operation::Compare { lhs, rhs })
    }

    pub fn register_op(op: Operation) {
        let mut register = TRACKING_REGISTER.lock().unwrap();
        register.ops.push(op);
    }
}

/// Dummy implementation.
#[cfg(not(feature = "tracking"))]
#[allow(dead_code)]
mod tracking_impl {
    use super::*;

    #[inline]
    pub fn register_cmp<T>(_left: *const T, _right: *const T) {}
    #[inline]
    pub fn register_buffer<T>(_name: &'static str, _buf: &[T]) {}
    #[inline]
    pub fn deregister_buffer(_name: &'static str) {}
    #[inline]
    pub fn register_op(_op: Operation) {}
}

#[cfg(feature = "tracking")]
pub use tracking_impl::read_tracked_ops;
pub(crate) use tracking_impl::{deregister_buffer, register_buffer, register_cmp, register_op};
