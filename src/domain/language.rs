/// Maps a human-readable language name to its translation code.
///
/// Unrecognized names fall back to the lower-cased input as a pseudo-code
/// and are passed through to the translation service unvalidated.
pub fn language_code(name: &str) -> String {
    let code = match name {
        "English" => "en",
        "Spanish" => "es",
        "French" => "fr",
        "German" => "de",
        "Italian" => "it",
        "Portuguese" => "pt",
        "Russian" => "ru",
        "Chinese" => "zh",
        "Japanese" => "ja",
        "Korean" => "ko",
        "Arabic" => "ar",
        "Hindi" => "hi",
        "Dutch" => "nl",
        other => return other.to_lowercase(),
    };
    code.to_string()
}
