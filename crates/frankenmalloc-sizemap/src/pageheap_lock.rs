//! Process-wide lock for allocator state outside the size map.
//!
//! The central free lists and the page heap serialize on this lock. The size
//! map itself is immutable after init and never takes it.

use parking_lot::{Mutex, MutexGuard, const_mutex};

/// Guards central free lists and the page heap. Usable before `main`.
pub static PAGEHEAP_LOCK: Mutex<()> = const_mutex(());

/// Acquire [`PAGEHEAP_LOCK`].
pub fn pageheap_lock() -> MutexGuard<'static, ()> {
    PAGEHEAP_LOCK.lock()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn lock_excludes_second_holder() {
        let guard = pageheap_lock();
        assert!(PAGEHEAP_LOCK.try_lock().is_none());
        drop(guard);
        drop(pageheap_lock());
    }

    #[test]
    fn serializes_concurrent_critical_sections() {
        let inside = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let inside = Arc::clone(&inside);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        let _guard = pageheap_lock();
                        assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0);
                        inside.fetch_sub(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
