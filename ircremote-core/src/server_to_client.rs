use unicase::UniCase;

/// The part of the server traffic the client reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'m> {
    /// RPL_ENDOFMOTD (376)
    EndOfMotd,
    Ping {
        token: Option<&'m [u8]>,
    },
    PrivMsg {
        target: Option<&'m [u8]>,
        content: Option<&'m [u8]>,
    },
    Unknown(&'m str),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageDecodingError {
    #[error("cannot decode command {command:?} as utf8")]
    CannotDecodeUtf8 { command: Vec<u8> },
}

fn handle_end_of_motd(_message: ircremote_parser::Message<'_>) -> Message<'_> {
    Message::EndOfMotd
}

fn handle_ping(message: ircremote_parser::Message<'_>) -> Message<'_> {
    Message::Ping {
        token: message.trailing(),
    }
}

fn handle_privmsg(message: ircremote_parser::Message<'_>) -> Message<'_> {
    Message::PrivMsg {
        target: message.first_parameter(),
        content: message.trailing(),
    }
}

type Handler = for<'m> fn(ircremote_parser::Message<'m>) -> Message<'m>;

static REGISTRY: phf::Map<UniCase<&str>, Handler> = phf::phf_map! {
    UniCase::ascii("376") => handle_end_of_motd,
    UniCase::ascii("PING") => handle_ping,
    UniCase::ascii("PRIVMSG") => handle_privmsg,
};

impl<'m> TryFrom<ircremote_parser::Message<'m>> for Message<'m> {
    type Error = MessageDecodingError;

    fn try_from(message: ircremote_parser::Message<'m>) -> Result<Self, Self::Error> {
        let command = message.command();
        let command =
            std::str::from_utf8(command).map_err(|_| MessageDecodingError::CannotDecodeUtf8 {
                command: command.to_vec(),
            })?;

        let Some(handler) = REGISTRY.get(&UniCase::ascii(command)) else {
            return Ok(Message::Unknown(command));
        };

        Ok(handler(message))
    }
}

#[cfg(test)]
mod tests {
    use ircremote_parser::parse_message;

    use super::{Message, MessageDecodingError};

    fn decode(line: &[u8]) -> Result<Message<'_>, MessageDecodingError> {
        Message::try_from(parse_message(line).unwrap())
    }

    #[test]
    fn end_of_motd() {
        let message = decode(b":irc.example.org 376 dj :End of /MOTD command.").unwrap();
        assert_eq!(message, Message::EndOfMotd);
    }

    #[test]
    fn ping() {
        let message = decode(b"PING :irc.example.org").unwrap();
        assert_eq!(
            message,
            Message::Ping {
                token: Some(b"irc.example.org")
            }
        );
    }

    #[test]
    fn ping_without_trailing() {
        let message = decode(b"PING irc.example.org").unwrap();
        assert_eq!(message, Message::Ping { token: None });
    }

    #[test]
    fn privmsg() {
        let message = decode(b":nick!user@host PRIVMSG #music :!play").unwrap();
        assert_eq!(
            message,
            Message::PrivMsg {
                target: Some(b"#music"),
                content: Some(b"!play"),
            }
        );
    }

    #[test]
    fn case_insensitive() {
        let message = decode(b"ping :x").unwrap();
        assert_eq!(message, Message::Ping { token: Some(b"x") });
    }

    #[test]
    fn unknown() {
        let message = decode(b":irc.example.org 375 dj :- MOTD -").unwrap();
        assert_eq!(message, Message::Unknown("375"));
    }

    #[test]
    fn invalid_utf8_command() {
        let err = decode(b"P\xffNG :x").unwrap_err();
        assert_eq!(
            err,
            MessageDecodingError::CannotDecodeUtf8 {
                command: b"P\xffNG".to_vec()
            }
        );
    }
}
