#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
}

/// A playable resource with its input options (`option` or `option=value`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    uri: String,
    options: Vec<String>,
}

impl MediaItem {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            options: vec![],
        }
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

#[derive(thiserror::Error, Debug)]
#[error("playback target refused: {0}")]
pub struct TargetError(pub String);

/// The media engine driven by the bot commands.
///
/// It is shared with the host application and called from the connection task,
/// hence `Send + Sync` and `&self` everywhere.
pub trait PlaybackTarget: Send + Sync {
    /// `None` when there is no current item.
    fn status(&self) -> Option<PlaybackStatus>;

    fn play(&self);

    fn pause(&self);

    fn next(&self);

    fn prev(&self);

    fn stop(&self);

    /// Empties the queue.
    fn clear(&self);

    /// Appends to the end of the queue.
    fn enqueue(&self, item: MediaItem) -> Result<(), TargetError>;
}
