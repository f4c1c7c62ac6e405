/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("mcp-lookup-server/", env!("CARGO_PKG_VERSION"));

/// Free Dictionary API base URL (English entries)
pub const DICTIONARY_API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// wttr.in base URL
pub const WEATHER_API_BASE: &str = "https://wttr.in";

/// Query string appended to every weather request.
pub const WEATHER_QUERY: &str = "2F";

/// Reply for words the dictionary does not know
pub const UNKNOWN_WORD: &str = "I don't know this word";

/// Prefix of the reply for cities without a weather report
pub const NO_WEATHER_INFO: &str = "Don't have any weather info on ";
