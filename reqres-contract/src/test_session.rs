use lazy_static::lazy_static;
use std::sync::{Condvar, Mutex, PoisonError};

lazy_static! {
    static ref TEST_SESSION: TestSession = TestSession::new();
}

/// Process-wide gate that lets one live test talk to the service at a time.
pub struct TestSession {
    lock: (Mutex<bool>, Condvar),
}

/// Held for the duration of a test; the next test is let in when it drops.
#[must_use = "the session is released as soon as the guard is dropped"]
pub struct SessionGuard {
    _private: (),
}

impl TestSession {
    fn new() -> Self {
        Self {
            lock: (Mutex::new(false), Condvar::new()),
        }
    }

    /// Blocks until no other test holds the session.
    pub fn enter() -> SessionGuard {
        TEST_SESSION.enter_test();
        SessionGuard { _private: () }
    }

    fn enter_test(&self) {
        let (lock, cond) = &self.lock;
        let mut is_test_running = cond
            .wait_while(
                lock.lock().unwrap_or_else(PoisonError::into_inner),
                |is_test_running| *is_test_running,
            )
            .unwrap_or_else(PoisonError::into_inner);
        *is_test_running = true;
    }

    fn exit_test(&self) {
        let (lock, cond) = &self.lock;
        let mut is_test_running = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *is_test_running = false;

        cond.notify_one();
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        TEST_SESSION.exit_test();
    }
}
