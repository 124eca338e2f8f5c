/// Note: tags (IRCv3) are not handled, a line starting with '@' is read as a command.
mod parser;
mod stream;

pub use crate::parser::{parse_message, ParseError};
pub use crate::stream::{LineAssembler, LineTooLong, DEFAULT_MAX_LINE_LEN};

///
/// See: https://modern.ircdocs.horse/#message-format
///
/// The parameters are kept unsplit: `params` is the raw text between the command
/// and the trailing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'m> {
    prefix: Option<&'m [u8]>,
    command: &'m [u8],
    params: &'m [u8],
    trailing: Option<&'m [u8]>,
}

impl<'m> Message<'m> {
    pub fn prefix(&self) -> Option<&'m [u8]> {
        self.prefix
    }

    /// Never empty.
    pub fn command(&self) -> &'m [u8] {
        self.command
    }

    pub fn params(&self) -> &'m [u8] {
        self.params
    }

    pub fn trailing(&self) -> Option<&'m [u8]> {
        self.trailing
    }

    /// Middle parameters split on spaces, empty ones skipped.
    pub fn middle_parameters(&self) -> impl Iterator<Item = &'m [u8]> + use<'m> {
        self.params
            .split(|&c| c == b' ')
            .filter(|param| !param.is_empty())
    }

    pub fn first_parameter(&self) -> Option<&'m [u8]> {
        self.middle_parameters().next()
    }
}
