use std::error::Error;
use std::fmt;

/// Interpret a string value such as "1" or "no" as a boolean.
///
/// Returns `None` if the value is not recognized.
pub fn str_as_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" => Some(true),
        "0" | "false" | "f" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Value of an environment flag that could not be interpreted as a boolean.
#[derive(Clone, Debug, PartialEq)]
pub struct UnrecognizedFlag {
    pub name: String,
    pub value: String,
}

impl fmt::Display for UnrecognizedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized boolean value \"{}\" for {}", self.value, self.name)
    }
}

impl Error for UnrecognizedFlag {}

/// Return whether a flag controlled by an environment variable is enabled.
///
/// Unset variables yield `default`. Unrecognized values are returned as an
/// error so the caller can report them once logging is configured.
pub fn env_flag(name: &str, default: bool) -> Result<bool, UnrecognizedFlag> {
    let Ok(value) = std::env::var(name) else {
        return Ok(default);
    };
    str_as_bool(&value).ok_or(UnrecognizedFlag {
        name: name.to_string(),
        value,
    })
}

/// Resolve the result of [`env_flag`], logging a warning and falling back to
/// `default` if the value was not recognized.
pub fn flag_or_warn(flag: Result<bool, UnrecognizedFlag>, default: bool) -> bool {
    flag.unwrap_or_else(|err| {
        log::warn!("{}", err);
        default
    })
}
