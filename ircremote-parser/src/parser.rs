use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::char,
    combinator::{opt, rest},
    sequence::{preceded, terminated},
    IResult,
};

use crate::Message;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("prefix is not followed by a space")]
    MalformedPrefix,
    #[error("no command followed by a space")]
    MissingCommand,
}

fn is_space(c: u8) -> bool {
    c == b' '
}

// prefix ::= ':' <text without space> SPACE
fn parse_prefix(buf: &[u8]) -> IResult<&[u8], &[u8]> {
    preceded(char(':'), terminated(take_till(is_space), char(' ')))(buf)
}

// command ::= <non-empty text without space> SPACE
fn parse_command(buf: &[u8]) -> IResult<&[u8], &[u8]> {
    terminated(take_till1(is_space), char(' '))(buf)
}

// parameters ::= <params without ':'> [':' <trailing>]
fn parse_parameters(buf: &[u8]) -> IResult<&[u8], (&[u8], Option<&[u8]>)> {
    let (buf, params) = take_till(|c| c == b':')(buf)?;
    let (buf, trailing) = opt(preceded(char(':'), rest))(buf)?;
    Ok((buf, (params, trailing)))
}

// message ::= [':' <prefix> SPACE] <command> SPACE [<params>] [':' <trailing>]
pub fn parse_message(line: &[u8]) -> Result<Message<'_>, ParseError> {
    let (buf, prefix) = if line.first() == Some(&b':') {
        let (buf, prefix) = parse_prefix(line).map_err(|_| ParseError::MalformedPrefix)?;
        (buf, Some(prefix))
    } else {
        (line, None)
    };

    let (buf, command) = parse_command(buf).map_err(|_| ParseError::MissingCommand)?;

    // cannot fail: both halves accept empty input
    let (_, (params, trailing)) =
        parse_parameters(buf).map_err(|_| ParseError::MissingCommand)?;

    Ok(Message {
        prefix,
        command,
        params,
        trailing,
    })
}
