use std::str::FromStr;

/// An environment variable whose value could not be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{name} must be a valid {expected}, got {value:?}")]
pub struct InvalidVar {
    pub name: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Parse `name` from `lookup`, falling back to `default` when unset.
pub fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, InvalidVar> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| InvalidVar {
            name,
            expected,
            value,
        }),
    }
}
