//! Locator format: `"<locator> [:option-name[=option-value]]..."`.
//!
//! Surrounding quotes are stripped from each item, but they do not protect a ':' that
//! follows a blank: it always starts a new option.

use std::path::Path;

use url::Url;

use crate::target::MediaItem;

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn starts_option(buf: &[u8]) -> bool {
    matches!(buf, [b':', ..] | [b'"' | b'\'', b':', ..])
}

fn unquote(mut item: &str) -> &str {
    for quote in ['"', '\''] {
        if item.len() >= 2 && item.starts_with(quote) && item.ends_with(quote) {
            item = &item[1..item.len() - 1];
        }
    }
    item
}

fn split_items(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        rest = rest.trim_start_matches(is_blank);
        if rest.is_empty() {
            return None;
        }

        let bytes = rest.as_bytes();
        let end = (0..bytes.len())
            .find(|&i| matches!(bytes[i], b' ' | b'\t') && starts_option(&bytes[i + 1..]))
            .unwrap_or(bytes.len());

        let (item, tail) = rest.split_at(end);
        rest = tail;
        Some(unquote(item.trim_end_matches(is_blank)))
    })
}

fn path_to_uri(path: &str) -> Option<String> {
    let path = Path::new(path);
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };
    Url::from_file_path(path).ok().map(String::from)
}

/// Builds a playable item from a locator and its trailing options.
///
/// Anything containing `://` is taken as a URI, everything else as a local path.
pub fn parse_locator(input: &str) -> Option<MediaItem> {
    let mut items = split_items(input);

    let locator = items.next().filter(|l| !l.is_empty())?;
    let uri = if locator.contains("://") {
        locator.to_string()
    } else {
        path_to_uri(locator)?
    };

    let item = items
        .filter(|option| !option.is_empty())
        .fold(MediaItem::new(uri), |item, option| {
            // drop the ':' introducing the option
            let mut chars = option.chars();
            chars.next();
            item.with_option(chars.as_str())
        });
    Some(item)
}
