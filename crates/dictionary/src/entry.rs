use serde::{Deserialize, Serialize};

/// One lookup response. A word normally has exactly one entry, but the API
/// returns a sequence and the bookmark file stores it as one.
pub type LookupResult = Vec<Entry>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phonetics: Vec<Phonetic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// URL of a pronunciation clip. The live API sometimes sends an empty
    /// string instead of omitting the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a live response for "hello".
    const HELLO: &str = r#"[
        {
            "word": "hello",
            "phonetic": "/həˈləʊ/",
            "phonetics": [
                { "text": "/həˈləʊ/", "audio": "" },
                { "text": "/həˈloʊ/", "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-us.mp3" }
            ],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        {
                            "definition": "\"Hello!\" or an equivalent greeting.",
                            "synonyms": [],
                            "antonyms": []
                        }
                    ],
                    "synonyms": ["greeting"],
                    "antonyms": []
                },
                {
                    "partOfSpeech": "interjection",
                    "definitions": [
                        {
                            "definition": "A greeting used when answering the telephone.",
                            "example": "Hello? How may I help you?"
                        }
                    ],
                    "synonyms": [],
                    "antonyms": []
                }
            ],
            "license": { "name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0" }
        }
    ]"#;

    #[test]
    fn deserializes_a_live_response_body() {
        let entries: LookupResult = serde_json::from_str(HELLO).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic.as_deref(), Some("/həˈləʊ/"));
        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(entry.meanings[0].synonyms, vec!["greeting"]);
        assert_eq!(
            entry.meanings[1].definitions[0].example.as_deref(),
            Some("Hello? How may I help you?")
        );
        assert_eq!(
            entry.phonetics[1].audio.as_deref(),
            Some("https://api.dictionaryapi.dev/media/pronunciations/en/hello-us.mp3")
        );
    }

    #[test]
    fn part_of_speech_serializes_as_camel_case() {
        let meaning = Meaning {
            part_of_speech: "verb".to_string(),
            definitions: vec![Definition {
                definition: "to do something".to_string(),
                example: None,
            }],
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        };
        let value = serde_json::to_value(&meaning).unwrap();
        assert_eq!(value["partOfSpeech"], "verb");
        assert!(value.get("part_of_speech").is_none());
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let entry = Entry {
            word: "terse".to_string(),
            phonetic: None,
            phonetics: Vec::new(),
            origin: None,
            meanings: Vec::new(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("phonetic").is_none());
        assert!(value.get("phonetics").is_none());
        assert!(value.get("origin").is_none());
    }
}
