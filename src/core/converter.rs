// File: src/core/converter.rs
//
// Per-character transliteration of German, French, Spanish and Russian letters to ASCII.

/// A pluggable text-to-ASCII conversion used by the cleaning pipeline.
pub trait Transliterate: Send + Sync {
    fn transliterate(&self, text: &str) -> String;
}

impl<F> Transliterate for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transliterate(&self, text: &str) -> String {
        self(text)
    }
}

/// The built-in table-driven transliterator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTransliterator;

impl Transliterate for AsciiTransliterator {
    fn transliterate(&self, text: &str) -> String {
        u2a(text)
    }
}

/// Transliterates one string. Characters without a mapping pass through unchanged.
pub fn u2a(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match map_char(c) {
            Some(ascii) => result.push_str(ascii),
            None => result.push(c),
        }
    }
    result
}

/// Transliterates every string of a collection.
pub fn u2a_all<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|t| u2a(t.as_ref())).collect()
}

fn map_char(c: char) -> Option<&'static str> {
    let ascii = match c {
        // German
        'Ü' => "UE", 'Ä' => "AE", 'Ö' => "OE",
        'ü' => "ue", 'ä' => "ae", 'ö' => "oe",
        'ß' => "ss",
        // French
        'é' => "e", 'à' => "a", 'è' => "e", 'ù' => "u", 'â' => "a",
        'ê' => "e", 'î' => "i", 'ô' => "o", 'û' => "u", 'ç' => "c",
        'É' => "E", 'À' => "A", 'È' => "E", 'Ù' => "U", 'Â' => "A",
        'Ê' => "E", 'Î' => "I", 'Ô' => "O", 'Û' => "U", 'Ç' => "C",
        // Spanish
        'ñ' => "n", 'Ñ' => "N",
        // Russian
        'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d",
        'е' => "e", 'ж' => "zh", 'з' => "z", 'и' => "i", 'й' => "i",
        'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n", 'о' => "o",
        'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t", 'у' => "u",
        'ф' => "f", 'х' => "kh", 'ц' => "ts", 'ч' => "ch", 'ш' => "sh",
        'щ' => "shch", 'ы' => "y", 'э' => "e", 'ю' => "iu", 'я' => "ia",
        'ё' => "e", 'ъ' => "", 'ь' => "",
        'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G", 'Д' => "D",
        'Е' => "E", 'Ж' => "Zh", 'З' => "Z", 'И' => "I", 'Й' => "I",
        'К' => "K", 'Л' => "L", 'М' => "M", 'Н' => "N", 'О' => "O",
        'П' => "P", 'Р' => "R", 'С' => "S", 'Т' => "T", 'У' => "U",
        'Ф' => "F", 'Х' => "Kh", 'Ц' => "Ts", 'Ч' => "Ch", 'Ш' => "Sh",
        'Щ' => "Shch", 'Ы' => "Y", 'Э' => "E", 'Ю' => "Iu", 'Я' => "Ia",
        'Ё' => "E", 'Ъ' => "", 'Ь' => "",
        _ => return None,
    };
    Some(ascii)
}
