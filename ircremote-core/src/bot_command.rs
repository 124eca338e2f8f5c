use crate::error::ActionError;
use crate::locator::parse_locator;
use crate::target::{PlaybackStatus, PlaybackTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    String,
}

/// Commands accepted from the channel as `!<name> [argument]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Play,
    Pause,
    Next,
    Prev,
    Clear,
    Enqueue,
}

static BOT_COMMANDS: phf::Map<&'static str, BotCommand> = phf::phf_map! {
    "play" => BotCommand::Play,
    "pause" => BotCommand::Pause,
    "next" => BotCommand::Next,
    "prev" => BotCommand::Prev,
    "clear" => BotCommand::Clear,
    "enqueue" => BotCommand::Enqueue,
};

impl BotCommand {
    pub fn lookup(name: &str) -> Option<Self> {
        BOT_COMMANDS.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BotCommand::Play => "play",
            BotCommand::Pause => "pause",
            BotCommand::Next => "next",
            BotCommand::Prev => "prev",
            BotCommand::Clear => "clear",
            BotCommand::Enqueue => "enqueue",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            BotCommand::Enqueue => Arity::String,
            _ => Arity::None,
        }
    }

    /// Runs the command against the target.
    ///
    /// Returns the status line to send back to the channel, or `None` when the
    /// command had nothing to do (play while playing, pause while not playing).
    ///
    /// Only `play` and `pause` need a current item. The other commands act on the
    /// queue itself and also run against an empty one, so that a first `enqueue`
    /// can give the target something to play.
    pub fn execute(
        self,
        target: &dyn PlaybackTarget,
        argument: &str,
    ) -> Result<Option<&'static str>, ActionError> {
        let status = match self {
            BotCommand::Play => {
                if target.status().ok_or(ActionError::NoActiveItem)? == PlaybackStatus::Playing {
                    return Ok(None);
                }
                target.play();
                "Playing"
            }
            BotCommand::Pause => {
                if target.status().ok_or(ActionError::NoActiveItem)? != PlaybackStatus::Playing {
                    return Ok(None);
                }
                target.pause();
                "Paused"
            }
            BotCommand::Next => {
                target.next();
                "Next"
            }
            BotCommand::Prev => {
                target.prev();
                "Next"
            }
            BotCommand::Clear => {
                target.stop();
                target.clear();
                "Clear"
            }
            BotCommand::Enqueue => {
                if argument.is_empty() {
                    return Err(ActionError::MissingArgument);
                }
                let item = parse_locator(argument)
                    .ok_or_else(|| ActionError::InvalidLocator(argument.to_string()))?;
                log::info!("enqueueing {}", item.uri());
                target.enqueue(item)?;
                "Enqueued"
            }
        };
        Ok(Some(status))
    }
}

/// `!<name> [argument]` read from a PRIVMSG.
///
/// Only the first token after the name is kept as the argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub argument: Option<&'a str>,
}

impl<'a> Invocation<'a> {
    pub fn parse(content: &'a str) -> Option<Self> {
        let mut tokens = content.strip_prefix('!')?.split_whitespace();
        let name = tokens.next()?;
        let argument = tokens.next();
        Some(Self { name, argument })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use parking_lot::Mutex;
    use rstest::rstest;

    use super::{Arity, BotCommand, Invocation};
    use crate::error::ActionError;
    use crate::target::{MediaItem, PlaybackStatus, PlaybackTarget, TargetError};

    /// Remembers every call, and answers `status()` with whatever the test set.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingTarget {
        pub(crate) status: Mutex<Option<PlaybackStatus>>,
        pub(crate) calls: Mutex<Vec<String>>,
        pub(crate) refuse_enqueue: bool,
    }

    impl RecordingTarget {
        pub(crate) fn with_status(status: Option<PlaybackStatus>) -> Self {
            Self {
                status: Mutex::new(status),
                ..Default::default()
            }
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        fn record(&self, call: &str) {
            self.calls.lock().push(call.to_string());
        }
    }

    impl PlaybackTarget for RecordingTarget {
        fn status(&self) -> Option<PlaybackStatus> {
            *self.status.lock()
        }

        fn play(&self) {
            self.record("play");
        }

        fn pause(&self) {
            self.record("pause");
        }

        fn next(&self) {
            self.record("next");
        }

        fn prev(&self) {
            self.record("prev");
        }

        fn stop(&self) {
            self.record("stop");
        }

        fn clear(&self) {
            self.record("clear");
        }

        fn enqueue(&self, item: MediaItem) -> Result<(), TargetError> {
            if self.refuse_enqueue {
                return Err(TargetError("queue is full".to_string()));
            }
            self.record(&format!("enqueue {}", item.uri()));
            Ok(())
        }
    }

    #[rstest]
    #[case::simple("!pause", "pause", None)]
    #[case::argument("!enqueue http://x/y", "enqueue", Some("http://x/y"))]
    #[case::extra_tokens_dropped("!enqueue http://x/y extra ignored", "enqueue", Some("http://x/y"))]
    #[case::blanks("!next  \t", "next", None)]
    fn invocation(#[case] content: &str, #[case] name: &str, #[case] argument: Option<&str>) {
        assert_eq!(
            Invocation::parse(content),
            Some(Invocation { name, argument })
        );
    }

    #[rstest]
    #[case::no_bang("pause")]
    #[case::bang_only("!")]
    #[case::bang_blank("!  ")]
    fn not_an_invocation(#[case] content: &str) {
        assert_eq!(Invocation::parse(content), None);
    }

    #[test]
    fn blank_before_name() {
        let invocation = Invocation::parse("! pause now").unwrap();
        assert_eq!(invocation.name, "pause");
        assert_eq!(invocation.argument, Some("now"));
    }

    #[test]
    fn lookup() {
        assert_eq!(BotCommand::lookup("enqueue"), Some(BotCommand::Enqueue));
        assert_eq!(BotCommand::lookup("Play"), None);
        assert_eq!(BotCommand::lookup("stop"), None);
        assert_eq!(BotCommand::Enqueue.arity(), Arity::String);
        assert_eq!(BotCommand::Clear.arity(), Arity::None);
        for command in ["play", "pause", "next", "prev", "clear", "enqueue"] {
            assert_eq!(BotCommand::lookup(command).map(BotCommand::name), Some(command));
        }
    }

    #[rstest]
    #[case::play_when_paused(BotCommand::Play, PlaybackStatus::Paused, Some("Playing"), &["play"])]
    #[case::play_when_stopped(BotCommand::Play, PlaybackStatus::Stopped, Some("Playing"), &["play"])]
    #[case::play_when_playing(BotCommand::Play, PlaybackStatus::Playing, None, &[])]
    #[case::pause_when_playing(BotCommand::Pause, PlaybackStatus::Playing, Some("Paused"), &["pause"])]
    #[case::pause_when_paused(BotCommand::Pause, PlaybackStatus::Paused, None, &[])]
    #[case::next(BotCommand::Next, PlaybackStatus::Playing, Some("Next"), &["next"])]
    #[case::prev(BotCommand::Prev, PlaybackStatus::Playing, Some("Next"), &["prev"])]
    #[case::clear(BotCommand::Clear, PlaybackStatus::Playing, Some("Clear"), &["stop", "clear"])]
    fn execute(
        #[case] command: BotCommand,
        #[case] status: PlaybackStatus,
        #[case] expected: Option<&str>,
        #[case] calls: &[&str],
    ) {
        let target = RecordingTarget::with_status(Some(status));
        let result = command.execute(&target, "").unwrap();
        assert_eq!(result, expected);
        assert_eq!(target.calls(), calls);
    }

    #[rstest]
    #[case::next(BotCommand::Next, "", Some("Next"), &["next"])]
    #[case::prev(BotCommand::Prev, "", Some("Next"), &["prev"])]
    #[case::clear(BotCommand::Clear, "", Some("Clear"), &["stop", "clear"])]
    #[case::enqueue(BotCommand::Enqueue, "http://x/y", Some("Enqueued"), &["enqueue http://x/y"])]
    fn queue_commands_without_item(
        #[case] command: BotCommand,
        #[case] argument: &str,
        #[case] expected: Option<&str>,
        #[case] calls: &[&str],
    ) {
        let target = RecordingTarget::with_status(None);
        assert_eq!(command.execute(&target, argument).unwrap(), expected);
        assert_eq!(target.calls(), calls);
    }

    #[test]
    fn play_without_item() {
        let target = RecordingTarget::with_status(None);
        let err = BotCommand::Play.execute(&target, "").unwrap_err();
        assert!(matches!(err, ActionError::NoActiveItem));
        assert!(target.calls().is_empty());
    }

    #[test]
    fn enqueue() {
        let target = RecordingTarget::default();
        let result = BotCommand::Enqueue.execute(&target, "http://x/y").unwrap();
        assert_eq!(result, Some("Enqueued"));
        assert_eq!(target.calls(), ["enqueue http://x/y"]);
    }

    #[test]
    fn enqueue_without_argument() {
        let target = RecordingTarget::default();
        let err = BotCommand::Enqueue.execute(&target, "").unwrap_err();
        assert!(matches!(err, ActionError::MissingArgument));
    }

    #[test]
    fn enqueue_refused() {
        let target = RecordingTarget {
            refuse_enqueue: true,
            ..Default::default()
        };
        let err = BotCommand::Enqueue.execute(&target, "http://x/y").unwrap_err();
        assert!(matches!(err, ActionError::Target(_)));
    }
}
