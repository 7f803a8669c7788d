//! Script-boundary segmentation for text written without spaces

use unicode_normalization::char::is_combining_mark;

use crate::error::Result;
use crate::words::WordTokenizer;

/// Splits text wherever the character script changes.
///
/// Runs of hiragana, katakana, han ideographs and word characters
/// (alphanumerics and `_`) each form one token; every other symbol stands
/// alone, so `私はbotです!` becomes `私 は bot です !`. A combining mark
/// stays attached to the character before it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptTokenizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    Space,
    Word,
    Hiragana,
    Katakana,
    Han,
    Symbol,
}

fn classify(ch: char) -> CharClass {
    match ch {
        c if c.is_whitespace() => CharClass::Space,
        // katakana middle dot separates words
        '\u{30FB}' => CharClass::Symbol,
        '\u{3041}'..='\u{309F}' => CharClass::Hiragana,
        '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => {
            CharClass::Katakana
        }
        '\u{3005}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2FA1F}' => CharClass::Han,
        c if c.is_alphanumeric() || c == '_' => CharClass::Word,
        _ => CharClass::Symbol,
    }
}

impl WordTokenizer for ScriptTokenizer {
    fn tokenize(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len() + text.len() / 2);
        let mut previous: Option<CharClass> = None;

        for ch in text.chars() {
            if previous.is_some() && is_combining_mark(ch) {
                out.push(ch);
                continue;
            }
            let class = classify(ch);
            if class == CharClass::Space {
                previous = None;
                continue;
            }
            let joins = previous == Some(class) && class != CharClass::Symbol;
            if !joins && !out.is_empty() {
                out.push(' ');
            }
            out.push(ch);
            previous = Some(class);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Result<String> {
        ScriptTokenizer.tokenize(text)
    }

    #[test]
    fn test_japanese_script_boundaries() -> Result<()> {
        assert_eq!(tokens("私はbotです")?, "私 は bot です");
        assert_eq!(tokens("コーヒーを飲みたい")?, "コーヒー を 飲 みたい");
        assert_eq!(tokens("時々")?, "時々");
        Ok(())
    }

    #[test]
    fn test_spaced_text_is_kept_as_words() -> Result<()> {
        assert_eq!(tokens("hello   world 42")?, "hello world 42");
        assert_eq!(tokens("Ｒｕｓｔ１")?, "Ｒｕｓｔ１");
        Ok(())
    }

    #[test]
    fn test_symbols_stand_alone() -> Result<()> {
        assert_eq!(tokens("hi!!")?, "hi ! !");
        assert_eq!(tokens("$name")?, "$ name");
        assert_eq!(tokens("_ LOVE *")?, "_ LOVE *");
        assert_eq!(tokens("_LOVE")?, "_LOVE");
        assert_eq!(tokens("東京・大阪")?, "東京 ・ 大阪");
        Ok(())
    }

    #[test]
    fn test_underscore_is_a_word_character() -> Result<()> {
        assert_eq!(tokens("hello_world")?, "hello_world");
        assert_eq!(tokens("snake_case!")?, "snake_case !");
        Ok(())
    }

    #[test]
    fn test_combining_marks_stay_attached() -> Result<()> {
        assert_eq!(tokens("cafe\u{301} ok")?, "cafe\u{301} ok");
        assert_eq!(tokens("カ\u{3099}ス")?, "カ\u{3099}ス");
        assert_eq!(tokens("\u{301}a")?, "\u{301} a");
        Ok(())
    }

    #[test]
    fn test_blank_input() -> Result<()> {
        assert_eq!(tokens("")?, "");
        assert_eq!(tokens(" \u{3000}\n")?, "");
        Ok(())
    }
}
