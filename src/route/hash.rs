//! Hash Grammar
//!
//! Parses and formats the URL hash fragment. There is exactly one project
//! form, `project/<id>`; everything else selects the home view.

use nom::{
    bytes::complete::tag,
    character::complete::char,
    combinator::{opt, rest, verify},
    sequence::{pair, preceded},
    IResult,
};

use super::state::ViewState;

/// Prefix that marks a project detail hash
pub const PROJECT_PREFIX: &str = "project/";

/// Parse a hash fragment into a view state
///
/// Accepts the value with or without its leading `#`. Never fails: any input
/// that is not `project/<non-empty id>` yields [`ViewState::Home`].
pub fn parse_hash(hash: &str) -> ViewState {
    match parse_project_id(hash) {
        Ok((_, raw)) => ViewState::Project {
            id: decode_id(raw),
        },
        Err(_) => ViewState::Home,
    }
}

/// Format the canonical hash for a view state
///
/// Home is the empty hash. Project ids are percent-encoded so that
/// `parse_hash(&format_hash(s)) == s` for every non-empty id.
pub fn format_hash(state: &ViewState) -> String {
    match state {
        ViewState::Home => String::new(),
        ViewState::Project { id } => {
            format!("#{}{}", PROJECT_PREFIX, urlencoding::encode(id))
        }
    }
}

/// Match `[#]project/<rest>` with a non-empty rest
fn parse_project_id(input: &str) -> IResult<&str, &str> {
    preceded(
        pair(opt(char('#')), tag(PROJECT_PREFIX)),
        verify(rest, |id: &str| !id.is_empty()),
    )(input)
}

/// Percent-decode an identifier, keeping the raw text if it is not valid UTF-8
fn decode_id(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
