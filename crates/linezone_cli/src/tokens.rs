//! Splitting of `NAME<d>PATTERN<d>ARG...` function tokens.

use linezone_core::text::is_word_char;
use linezone_core::{ConfigError, FunctionToken};

const ESCAPE: char = '\\';

/// Split a raw function token into name, scoping-pattern slot and arguments.
///
/// The name is the leading run of alphanumerics and `_`. The character after
/// it, if any, is the field delimiter; `\<delimiter>` is a literal delimiter
/// and a trailing delimiter is ignored. The first field is the scoping
/// pattern (empty means the whole unit), the rest are arguments.
///
/// # Errors
/// Returns [`ConfigError::UnknownFunction`] when the token has no name.
pub(crate) fn split_function_token(raw: &str) -> Result<FunctionToken, ConfigError> {
    let name_len = raw
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(raw.len(), |(index, _)| index);
    if name_len == 0 {
        return Err(ConfigError::UnknownFunction(raw.to_string()));
    }
    let (name, rest) = raw.split_at(name_len);
    let token = FunctionToken::new(name);

    let mut chars = rest.chars();
    let Some(delimiter) = chars.next() else {
        return Ok(token);
    };
    let mut fields = split_fields(chars.as_str(), delimiter).into_iter();
    let pattern = fields.next().unwrap_or_default();
    Ok(token.with_pattern(pattern).with_args(fields))
}

fn split_fields(text: &str, delimiter: char) -> Vec<String> {
    let mut fields = vec![String::new()];
    let mut trailing = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        trailing = false;
        if c == ESCAPE && chars.peek() == Some(&delimiter) {
            chars.next();
            push_char(&mut fields, delimiter);
        } else if c == delimiter {
            fields.push(String::new());
            trailing = true;
        } else {
            push_char(&mut fields, c);
        }
    }
    if trailing {
        fields.pop();
    }
    fields
}

fn push_char(fields: &mut [String], c: char) {
    if let Some(field) = fields.last_mut() {
        field.push(c);
    }
}
