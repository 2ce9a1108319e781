use std::sync::{Mutex, OnceLock};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitProgress {
    Stage(&'static str),
    Finished,
}

static SPLIT_PROGRESS_CB: OnceLock<Mutex<Option<Box<dyn Fn(SplitProgress) + Send + 'static>>>> =
    OnceLock::new();

/// Installs the process-wide split progress callback. Only the first call wins.
pub fn set_split_progress_callback(cb: impl Fn(SplitProgress) + Send + 'static) {
    let _ = SPLIT_PROGRESS_CB.set(Mutex::new(Some(Box::new(cb))));
}

pub fn emit_split_progress(progress: SplitProgress) {
    if let Some(m) = SPLIT_PROGRESS_CB.get() {
        if let Ok(g) = m.lock() {
            if let Some(cb) = &*g {
                cb(progress);
            }
        }
    }
}
