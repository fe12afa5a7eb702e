//! Scratch pools for parse and thumbprint buffers
//!
//! Two process-wide free-lists: byte buffers (thumbprint assembly, claim
//! decoding) and big integers (exponent decoding). An instance is acquired as a
//! [`Pooled`] guard and goes back to its pool when the guard drops, on every
//! exit path. Release resets the logical content first, so a reacquired
//! buffer is empty and a reacquired integer is zero.
//!
//! Pooled values are scratch space only. Anything that outlives the call must
//! be copied out before the guard drops.

use crossbeam_queue::ArrayQueue;
use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Free instances kept per process-wide pool
pub const DEFAULT_POOL_SIZE: usize = 64;

static BYTE_BUFFERS: Lazy<Pool<Vec<u8>>> = Lazy::new(|| Pool::new(DEFAULT_POOL_SIZE));
static BIG_UINTS: Lazy<Pool<BigUint>> = Lazy::new(|| Pool::new(DEFAULT_POOL_SIZE));

/// Acquire a scratch byte buffer from the process-wide pool
#[must_use]
pub fn byte_buffer() -> Pooled<'static, Vec<u8>> {
    BYTE_BUFFERS.acquire()
}

/// Acquire a scratch big integer from the process-wide pool
#[must_use]
pub fn big_uint() -> Pooled<'static, BigUint> {
    BIG_UINTS.acquire()
}

/// Statistics of the process-wide byte buffer pool
#[must_use]
pub fn byte_buffer_stats() -> PoolStats {
    BYTE_BUFFERS.stats()
}

/// Statistics of the process-wide big integer pool
#[must_use]
pub fn big_uint_stats() -> PoolStats {
    BIG_UINTS.stats()
}

/// Values that can be reset to an empty state and reused
pub trait Recycle: Default + Send {
    /// Clear the logical content, keeping allocated capacity
    fn recycle(&mut self);
}

impl Recycle for Vec<u8> {
    fn recycle(&mut self) {
        self.clear();
    }
}

impl Recycle for BigUint {
    fn recycle(&mut self) {
        self.set_zero();
    }
}

/// Pool counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Instances allocated because the pool was empty
    pub created: u64,
    /// Acquisitions served from the free-list
    pub reused: u64,
    /// Instances currently waiting in the free-list
    pub available: usize,
}

/// Bounded, lock-free free-list of reusable values
pub struct Pool<T: Recycle> {
    free: ArrayQueue<T>,
    created: AtomicU64,
    reused: AtomicU64,
}

impl<T: Recycle> Pool<T> {
    /// Create a pool that keeps at most `max_pool_size` free instances
    ///
    /// A size of zero is raised to one.
    #[must_use]
    pub fn new(max_pool_size: usize) -> Self {
        Self {
            free: ArrayQueue::new(max_pool_size.max(1)),
            created: AtomicU64::new(0),
            reused: AtomicU64::new(0),
        }
    }

    /// Take a recycled instance, or allocate one if the pool is empty
    pub fn acquire(&self) -> Pooled<'_, T> {
        let value = match self.free.pop() {
            Some(value) => {
                self.reused.fetch_add(1, Ordering::Relaxed);
                value
            }
            None => {
                self.created.fetch_add(1, Ordering::Relaxed);
                trace!("pool empty, allocating scratch instance");
                T::default()
            }
        };
        Pooled { pool: self, value }
    }

    fn release(&self, mut value: T) {
        value.recycle();
        if self.free.push(value).is_err() {
            trace!("pool full, dropping scratch instance");
        }
    }

    /// Current counters
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            available: self.free.len(),
        }
    }
}

/// Scoped handle on a pooled value; returns it to the pool on drop
pub struct Pooled<'a, T: Recycle> {
    pool: &'a Pool<T>,
    value: T,
}

impl<T: Recycle> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Recycle> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Recycle> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        let value = std::mem::take(&mut self.value);
        self.pool.release(value);
    }
}
