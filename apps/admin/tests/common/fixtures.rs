//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use lingua_core::{AlphabetItem, ExerciseContent, Pair, PairItem, PairSide, PairsContent};

/// Alphabet entry as the server stores it.
pub fn letter(letter: &str, order: i32) -> Value {
    json!({
        "letter": letter,
        "transcription": format!("[{}]", letter),
        "audioUrl": format!("/uploads/{}.mp3", letter),
        "order": order,
    })
}

/// Language record with letters in the given `(letter, order)` pairs.
pub fn language(name: &str, code: &str, letters: &[(&str, i32)]) -> Value {
    json!({
        "name": name,
        "code": code,
        "alphabet": letters.iter().map(|(l, o)| letter(l, *o)).collect::<Vec<_>>(),
    })
}

pub fn module(language_id: i64, title: &str, lesson_ids: &[i64]) -> Value {
    json!({
        "title": title,
        "description": format!("{} description", title),
        "order": 1,
        "difficulty": "BEGINNER",
        "languageId": language_id,
        "lessonIds": lesson_ids,
    })
}

pub fn lesson(language_id: i64, module_id: i64, title: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{} description", title),
        "order": 1,
        "moduleId": module_id,
        "languageId": language_id,
    })
}

pub fn word(word: &str) -> Value {
    json!({
        "word": word,
        "audioUrl": format!("/uploads/{}.mp3", word),
        "imageUrl": format!("/uploads/{}.png", word),
    })
}

/// Two-pair MATCHING content. The first pair has an empty audio URL on the
/// left and none on the right; the second has audio on the right only.
pub fn matching_content() -> ExerciseContent {
    ExerciseContent::Pairs(PairsContent {
        name: "Match letters".to_string(),
        left: PairSide {
            is_letter: true,
            only_audio: false,
        },
        right: PairSide::default(),
        pairs: vec![
            Pair {
                id: "p1".to_string(),
                left: PairItem {
                    value: "аь".to_string(),
                    audio_url: Some(String::new()),
                    image_url: None,
                },
                right: PairItem {
                    value: "ä".to_string(),
                    audio_url: None,
                    image_url: None,
                },
            },
            Pair {
                id: "p2".to_string(),
                left: PairItem {
                    value: "б".to_string(),
                    audio_url: None,
                    image_url: None,
                },
                right: PairItem {
                    value: "b".to_string(),
                    audio_url: Some("/uploads/b.mp3".to_string()),
                    image_url: None,
                },
            },
        ],
        ..PairsContent::default()
    })
}

pub fn alphabet_item(letter: &str, order: i32) -> AlphabetItem {
    AlphabetItem::new(letter, format!("[{}]", letter), order)
}
