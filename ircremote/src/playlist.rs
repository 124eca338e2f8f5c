use parking_lot::Mutex;

use ircremote_core::{MediaItem, PlaybackStatus, PlaybackTarget, TargetError};

pub const DEFAULT_MAX_ITEMS: usize = 1024;

#[derive(Debug)]
struct State {
    items: Vec<MediaItem>,
    current: Option<usize>,
    status: PlaybackStatus,
}

/// An in-memory queue standing in for a media engine.
///
/// The first enqueued item becomes the current one, stopped.
#[derive(Debug)]
pub struct Playlist {
    state: Mutex<State>,
    max_items: usize,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::with_max_items(DEFAULT_MAX_ITEMS)
    }
}

impl Playlist {
    pub fn with_max_items(max_items: usize) -> Self {
        Self {
            state: Mutex::new(State {
                items: vec![],
                current: None,
                status: PlaybackStatus::Stopped,
            }),
            max_items,
        }
    }
}

#[cfg(test)]
impl Playlist {
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current(&self) -> Option<MediaItem> {
        let state = self.state.lock();
        state.current.and_then(|i| state.items.get(i)).cloned()
    }
}

impl State {
    fn current_uri(&self) -> &str {
        self.current
            .and_then(|i| self.items.get(i))
            .map_or("", MediaItem::uri)
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.current.is_none() || self.status == status {
            return;
        }
        self.status = status;
        log::info!("{:?}: {}", status, self.current_uri());
    }
}

impl PlaybackTarget for Playlist {
    fn status(&self) -> Option<PlaybackStatus> {
        let state = self.state.lock();
        state.current.map(|_| state.status)
    }

    fn play(&self) {
        self.state.lock().set_status(PlaybackStatus::Playing);
    }

    fn pause(&self) {
        let mut state = self.state.lock();
        if state.status == PlaybackStatus::Playing {
            state.set_status(PlaybackStatus::Paused);
        }
    }

    fn next(&self) {
        let mut state = self.state.lock();
        let Some(current) = state.current else {
            return;
        };
        if current + 1 < state.items.len() {
            state.current = Some(current + 1);
            log::info!("moved to {}", state.current_uri());
        } else {
            state.set_status(PlaybackStatus::Stopped);
        }
    }

    fn prev(&self) {
        let mut state = self.state.lock();
        if let Some(current) = state.current.filter(|&c| c > 0) {
            state.current = Some(current - 1);
            log::info!("moved back to {}", state.current_uri());
        }
    }

    fn stop(&self) {
        self.state.lock().set_status(PlaybackStatus::Stopped);
    }

    fn clear(&self) {
        let mut state = self.state.lock();
        log::info!("clearing {} items", state.items.len());
        state.items.clear();
        state.current = None;
        state.status = PlaybackStatus::Stopped;
    }

    fn enqueue(&self, item: MediaItem) -> Result<(), TargetError> {
        let mut state = self.state.lock();
        if state.items.len() >= self.max_items {
            return Err(TargetError(format!(
                "playlist is full ({} items)",
                self.max_items
            )));
        }

        state.items.push(item);
        if state.current.is_none() {
            state.current = Some(state.items.len() - 1);
            state.status = PlaybackStatus::Stopped;
        }
        Ok(())
    }
}
