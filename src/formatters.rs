use crate::constants::{NO_WEATHER_INFO, UNKNOWN_WORD};
use crate::error::{LookupError, Result};
use crate::models::DictionaryEntry;

/// Formats the first dictionary entry as `\n(part of speech) definition` lines
pub fn format_definitions(entries: &[DictionaryEntry]) -> Result<String> {
    let entry = entries.first().ok_or(LookupError::EmptyResponse)?;

    let mut output = String::new();
    for meaning in &entry.meanings {
        for definition in &meaning.definitions {
            output.push_str(&format!(
                "\n({}) {}",
                meaning.part_of_speech, definition.definition
            ));
        }
    }
    Ok(output)
}

pub fn unknown_word() -> String {
    UNKNOWN_WORD.to_string()
}

pub fn no_weather_info(city: &str) -> String {
    format!("{NO_WEATHER_INFO}{city}")
}
