// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File system watcher for live panel configuration reloads
//!
//! Uses OS-level file watching via the notify crate. The parent directory is
//! watched rather than the file itself: editors that save by renaming a
//! temporary file over the original (and our own atomic writes) would
//! otherwise orphan the watch.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver, RecvTimeoutError},
    time::Duration,
};

/// Outcome of `ConfigWatcher::wait_for_change`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WatchStatus {
    /// The file was written or recreated
    Changed,
    /// Nothing relevant happened before the timeout
    TimedOut,
    /// The notify backend has shut down; no further events will arrive
    Closed,
}

/// Watches a panel configuration file for modifications
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
    file_name: Option<OsString>,
}

impl ConfigWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        Ok(ConfigWatcher {
            _watcher: watcher,
            rx,
            file_name: path.file_name().map(|n| n.to_os_string()),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks for file modification events (non-blocking)
    pub fn check_for_changes(&self) -> bool {
        drain(&self.rx, self.file_name.as_deref())
    }

    /// Blocks until the file changes, `timeout` elapses or the watcher
    /// shuts down
    pub fn wait_for_change(&self, timeout: Duration) -> WatchStatus {
        wait_on(&self.rx, self.file_name.as_deref(), timeout)
    }
}

fn drain(rx: &Receiver<notify::Result<Event>>, file_name: Option<&OsStr>) -> bool {
    let mut changed = false;
    while let Ok(event_result) = rx.try_recv() {
        if let Ok(event) = event_result {
            changed |= is_relevant(&event, file_name);
        }
    }
    changed
}

pub(crate) fn wait_on(
    rx: &Receiver<notify::Result<Event>>,
    file_name: Option<&OsStr>,
    timeout: Duration,
) -> WatchStatus {
    loop {
        match rx.recv_timeout(timeout) {
            Ok(Ok(event)) if is_relevant(&event, file_name) => {
                // Editors often emit a burst of events per save
                let _ = drain(rx, file_name);
                return WatchStatus::Changed;
            }
            Ok(_) => continue,
            Err(RecvTimeoutError::Timeout) => return WatchStatus::TimedOut,
            Err(RecvTimeoutError::Disconnected) => return WatchStatus::Closed,
        }
    }
}

fn is_relevant(event: &Event, file_name: Option<&OsStr>) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return false;
    }
    event.paths.iter().any(|p| p.file_name() == file_name)
}
