use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Free Dictionary API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DictionaryEntry {
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
pub struct Definition {
    pub definition: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DefineWordRequest {
    /// Slash-delimited key expression; its last segment is the word (e.g. `dict/en/hello`).
    pub key_expr: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// Slash-delimited key expression; its last segment is the city (e.g. `weather/Paris`).
    pub key_expr: String,
}
