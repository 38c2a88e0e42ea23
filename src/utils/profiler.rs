use std::time::Instant;

use log::debug;

/// Logs how long the enclosing scope took once it is dropped.
pub struct ScopeTimer {
    name: &'static str,
    start: Instant,
}

impl ScopeTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        debug!("[TIMER] {} took {:?}", self.name, elapsed);
    }
}
