use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::{SimulationError, SimulationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopHandle(u64);

/// Playback side of the demo. Looping sounds run until stopped; completion is
/// polled with `is_playing`, never waited on.
pub trait AudioEngine {
    fn load_and_loop(&mut self, path: &Path) -> SimulationResult<LoopHandle>;

    fn stop(&mut self, handle: LoopHandle) -> SimulationResult<()>;

    fn is_playing(&self, handle: LoopHandle) -> bool;
}

/// Audio engine with no output device. Tracks which loops would be playing.
#[derive(Debug, Default)]
pub struct HeadlessAudio {
    require_existing_files: bool,
    next_handle: u64,
    active: HashMap<LoopHandle, PathBuf>,
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject paths that do not exist on disk, like a real decoder would.
    pub fn checking_files() -> Self {
        HeadlessAudio {
            require_existing_files: true,
            ..Self::default()
        }
    }

    pub fn active_loops(&self) -> usize {
        self.active.len()
    }

    pub fn path_of(&self, handle: LoopHandle) -> Option<&Path> {
        self.active.get(&handle).map(PathBuf::as_path)
    }
}

impl AudioEngine for HeadlessAudio {
    fn load_and_loop(&mut self, path: &Path) -> SimulationResult<LoopHandle> {
        if path.as_os_str().is_empty() {
            return Err(SimulationError::AudioError(
                "sound path cannot be empty".to_string(),
            ));
        }
        if self.require_existing_files && !path.is_file() {
            return Err(SimulationError::AudioError(format!(
                "failed to load sound file {}",
                path.display()
            )));
        }

        let handle = LoopHandle(self.next_handle);
        self.next_handle += 1;
        self.active.insert(handle, path.to_path_buf());
        Ok(handle)
    }

    fn stop(&mut self, handle: LoopHandle) -> SimulationResult<()> {
        self.active
            .remove(&handle)
            .map(|_| ())
            .ok_or_else(|| SimulationError::AudioError(format!("no active loop for {handle:?}")))
    }

    fn is_playing(&self, handle: LoopHandle) -> bool {
        self.active.contains_key(&handle)
    }
}
