use std::sync::Arc;

use smallvec::SmallVec;

use crate::bot_command::{Arity, BotCommand, Invocation};
use crate::client_to_server;
use crate::server_to_client;
use crate::target::PlaybackTarget;

pub type Replies<'a> = SmallVec<[client_to_server::Message<'a>; 2]>;

/// Turns inbound messages into replies and playback actions.
pub struct Dispatcher {
    channel: String,
    target: Arc<dyn PlaybackTarget>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(channel: &str, target: Arc<dyn PlaybackTarget>) -> Self {
        Self {
            channel: channel.to_owned(),
            target,
        }
    }

    pub fn dispatch<'a>(&'a self, message: &server_to_client::Message<'a>) -> Replies<'a> {
        let mut replies = Replies::new();
        match message {
            server_to_client::Message::EndOfMotd => {
                log::info!("end of MOTD, joining {}", self.channel);
                replies.push(client_to_server::Message::Join {
                    channel: &self.channel,
                });
            }
            server_to_client::Message::Ping { token } => {
                replies.push(client_to_server::Message::Pong {
                    token: token.unwrap_or_default(),
                });
            }
            server_to_client::Message::PrivMsg { target, content } => {
                let from = target.unwrap_or_default();
                if let Some(status) = content.and_then(|c| self.run_bot_command(from, c)) {
                    replies.push(client_to_server::Message::PrivMsg {
                        target: &self.channel,
                        content: status,
                    });
                }
            }
            server_to_client::Message::Unknown(_) => {}
        }
        replies
    }

    /// Status replies always go to the channel, whatever `from` was.
    fn run_bot_command(&self, from: &[u8], content: &[u8]) -> Option<&'static str> {
        if content.first() != Some(&b'!') {
            return None;
        }

        let Ok(content) = std::str::from_utf8(content) else {
            log::debug!("ignoring bot command that is not valid utf8");
            return None;
        };
        let invocation = Invocation::parse(content)?;
        let Some(command) = BotCommand::lookup(invocation.name) else {
            log::debug!("ignoring unknown bot command {:?}", invocation.name);
            return None;
        };

        let argument = match command.arity() {
            Arity::None => "",
            Arity::String => invocation.argument.unwrap_or_default(),
        };

        log::info!(
            "bot command {} sent to {}",
            command.name(),
            String::from_utf8_lossy(from)
        );
        match command.execute(self.target.as_ref(), argument) {
            Ok(status) => status,
            Err(err) => {
                log::debug!("bot command {} failed: {err}", command.name());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ircremote_parser::parse_message;

    use super::Dispatcher;
    use crate::bot_command::tests::RecordingTarget;
    use crate::client_to_server::Message;
    use crate::server_to_client;
    use crate::target::PlaybackStatus;

    fn setup(status: Option<PlaybackStatus>) -> (Arc<RecordingTarget>, Dispatcher) {
        let target = Arc::new(RecordingTarget::with_status(status));
        let dispatcher = Dispatcher::new("#music", target.clone());
        (target, dispatcher)
    }

    fn dispatch<'a>(dispatcher: &'a Dispatcher, line: &'a [u8]) -> Vec<Message<'a>> {
        let message = server_to_client::Message::try_from(parse_message(line).unwrap()).unwrap();
        dispatcher.dispatch(&message).into_vec()
    }

    #[test]
    fn end_of_motd_joins() {
        let (_, dispatcher) = setup(None);
        let replies = dispatch(&dispatcher, b":srv 376 dj :End of /MOTD command.");
        assert_eq!(replies, vec![Message::Join { channel: "#music" }]);
    }

    #[test]
    fn ping_pong() {
        let (_, dispatcher) = setup(None);
        let replies = dispatch(&dispatcher, b"PING :abc");
        assert_eq!(replies, vec![Message::Pong { token: b"abc" }]);
    }

    #[test]
    fn ping_without_trailing_gets_empty_pong() {
        let (_, dispatcher) = setup(None);
        let replies = dispatch(&dispatcher, b"PING srv");
        assert_eq!(replies, vec![Message::Pong { token: b"" }]);
    }

    #[test]
    fn pause() {
        let (target, dispatcher) = setup(Some(PlaybackStatus::Playing));
        let replies = dispatch(&dispatcher, b":bob!b@host PRIVMSG #music :!pause");
        assert_eq!(target.calls(), ["pause"]);
        assert_eq!(
            replies,
            vec![Message::PrivMsg {
                target: "#music",
                content: "Paused"
            }]
        );
    }

    #[test]
    fn private_command_replies_to_channel() {
        let (target, dispatcher) = setup(Some(PlaybackStatus::Paused));
        let replies = dispatch(&dispatcher, b":bob!b@host PRIVMSG dj :!play");
        assert_eq!(target.calls(), ["play"]);
        assert_eq!(
            replies,
            vec![Message::PrivMsg {
                target: "#music",
                content: "Playing"
            }]
        );
    }

    #[test]
    fn zero_argument_command_ignores_argument() {
        let (target, dispatcher) = setup(Some(PlaybackStatus::Paused));
        let replies = dispatch(&dispatcher, b":bob!b@host PRIVMSG #music :!play loud");
        assert_eq!(target.calls(), ["play"]);
        assert_eq!(replies.len(), 1);
    }

    #[test]
    fn enqueue_keeps_first_argument_only() {
        let (target, dispatcher) = setup(None);
        let replies = dispatch(
            &dispatcher,
            b":bob!b@host PRIVMSG #music :!enqueue http://x/y extra ignored",
        );
        assert_eq!(target.calls(), ["enqueue http://x/y"]);
        assert_eq!(
            replies,
            vec![Message::PrivMsg {
                target: "#music",
                content: "Enqueued"
            }]
        );
    }

    #[test]
    fn failed_action_is_silent() {
        let (target, dispatcher) = setup(None);
        let replies = dispatch(&dispatcher, b":bob!b@host PRIVMSG #music :!pause");
        assert!(replies.is_empty());
        assert!(target.calls().is_empty());

        let replies = dispatch(&dispatcher, b":bob!b@host PRIVMSG #music :!enqueue");
        assert!(replies.is_empty());
        assert!(target.calls().is_empty());
    }

    #[test]
    fn ignored_messages() {
        let (target, dispatcher) = setup(Some(PlaybackStatus::Playing));
        for line in [
            &b":bob!b@host PRIVMSG #music :hello"[..],
            b":bob!b@host PRIVMSG #music :!stop",
            b":bob!b@host PRIVMSG #music :!PAUSE",
            b":bob!b@host PRIVMSG #music",
            b":bob!b@host PRIVMSG #music :!\xff",
            b":srv 001 dj :Welcome",
            b":bob!b@host JOIN #music",
        ] {
            assert!(dispatch(&dispatcher, line).is_empty());
        }
        assert!(target.calls().is_empty());
    }
}
