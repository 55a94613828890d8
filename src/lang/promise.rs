use super::Error;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

/// A one-shot, externally settled promise. The producer calls
/// [`resolve`](Promise::resolve) or [`reject`](Promise::reject) once;
/// the consumer blocks on [`wait`](Promise::wait). The first
/// settlement wins and later ones are ignored.
pub struct Promise<T> {
    shared: Arc<Shared<T>>,
}

struct Shared<T> {
    result: Mutex<Option<Result<T, Error>>>,
    ready: Condvar,
}

impl<T> Promise<T> {
    pub fn new() -> Promise<T> {
        Promise {
            shared: Arc::new(Shared {
                result: Mutex::new(None),
                ready: Condvar::new(),
            }),
        }
    }

    pub fn resolve(&self, value: T) {
        self.settle(Ok(value));
    }

    pub fn reject(&self, error: Error) {
        self.settle(Err(error));
    }

    fn settle(&self, result: Result<T, Error>) {
        let mut slot = self.lock();
        if slot.is_none() {
            *slot = Some(result);
            self.shared.ready.notify_all();
        }
    }

    /// Block until settled and take the result.
    pub fn wait(self) -> Result<T, Error> {
        let mut slot = self.lock();
        loop {
            match slot.take() {
                Some(result) => return result,
                None => {
                    slot = match self.shared.ready.wait(slot) {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    }
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<Option<Result<T, Error>>> {
        match self.shared.result.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T> Clone for Promise<T> {
    fn clone(&self) -> Promise<T> {
        Promise {
            shared: self.shared.clone(),
        }
    }
}

impl<T> Default for Promise<T> {
    fn default() -> Promise<T> {
        Promise::new()
    }
}
