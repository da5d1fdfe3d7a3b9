//! Cyrillic to Latin transliteration for language codes.

/// Latin spelling of a lower-case Cyrillic letter.
fn latin(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(s)
}

/// Transliterate Cyrillic text to Latin. Upper-case letters come out
/// capitalised; anything outside the table is copied unchanged.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        match latin(lower) {
            Some(s) if lower != c => {
                let mut chars = s.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            }
            Some(s) => out.push_str(s),
            None => out.push(c),
        }
    }
    out
}

/// Code for a new language: the first two letters of its lower-cased name,
/// transliterated.
pub fn language_code(name: &str) -> String {
    let prefix: String = name.trim().to_lowercase().chars().take(2).collect();
    transliterate(&prefix)
}
