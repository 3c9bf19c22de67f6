/// Error type for geohex-rs operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoHexError {
    /// The level is above `MAX_LEVEL`, where grid indices would no longer
    /// fit in an i64.
    InvalidLevel(u8),
    /// The code length is outside the valid range (2 to `MAX_LEVEL` + 2).
    InvalidCodeLength(usize),
    /// The code contains a character outside its alphabet.
    InvalidCodeCharacter(char),
    /// The code is structurally inconsistent (not a valid base-9 numeral).
    MalformedCode(String),
}

impl std::fmt::Display for GeoHexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoHexError::InvalidLevel(level) => write!(f, "Invalid level: {}", level),
            GeoHexError::InvalidCodeLength(len) => write!(f, "Invalid code length: {}", len),
            GeoHexError::InvalidCodeCharacter(c) => {
                write!(f, "Invalid code character: {:?}", c)
            }
            GeoHexError::MalformedCode(msg) => write!(f, "Malformed code: {}", msg),
        }
    }
}

impl std::error::Error for GeoHexError {}
