use thiserror::Error;

/// Translates a phrase typed by the user into English
pub trait Translator {
    /// Translates a phrase, the result is not guaranteed to be a valid color
    ///
    /// # Parameters
    ///
    /// phrase: The phrase to translate
    ///
    /// # Errors
    ///
    /// See TranslateError for the possible errors
    fn translate(&self, phrase: &str) -> Result<String, TranslateError>;
}

/// Russian color words and modifiers with their English counterparts
const GLOSSARY: &[(&str, &str)] = &[
    ("белый", "white"),
    ("бирюзовый", "turquoise"),
    ("бордовый", "maroon"),
    ("голубой", "lightblue"),
    ("жёлтый", "yellow"),
    ("желтый", "yellow"),
    ("зелёный", "green"),
    ("зеленый", "green"),
    ("золотой", "gold"),
    ("коричневый", "brown"),
    ("красный", "red"),
    ("лаймовый", "lime"),
    ("лиловый", "violet"),
    ("малиновый", "crimson"),
    ("оливковый", "olive"),
    ("оранжевый", "orange"),
    ("пурпурный", "purple"),
    ("розовый", "pink"),
    ("салатовый", "chartreuse"),
    ("светло", "light"),
    ("светлый", "light"),
    ("серебряный", "silver"),
    ("серый", "gray"),
    ("синий", "blue"),
    ("тёмно", "dark"),
    ("темно", "dark"),
    ("тёмный", "dark"),
    ("темный", "dark"),
    ("фиолетовый", "violet"),
    ("чёрный", "black"),
    ("черный", "black"),
];

/// Translates word by word with a fixed glossary, unknown words pass through lowercased
#[derive(Clone, Copy, Debug, Default)]
pub struct GlossaryTranslator;

impl Translator for GlossaryTranslator {
    fn translate(&self, phrase: &str) -> Result<String, TranslateError> {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return Err(TranslateError::EmptyPhrase);
        }

        // Compound adjectives like "тёмно-синий" are split into words
        let words: Vec<String> = phrase
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                GLOSSARY
                    .iter()
                    .find(|(foreign, _)| *foreign == word)
                    .map_or_else(|| word.to_string(), |(_, english)| english.to_string())
            })
            .collect();

        log::debug!("Translated {:?} to {:?}", phrase, words);
        Ok(words.join(" "))
    }
}

/// The error types for when translating
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// There was nothing to translate
    #[error("Nothing to translate")]
    EmptyPhrase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_russian_words() {
        let translator = GlossaryTranslator;
        assert_eq!(translator.translate("Красный").unwrap(), "red");
        assert_eq!(translator.translate("тёмно-синий").unwrap(), "dark blue");
        assert_eq!(translator.translate(" светлый  зеленый ").unwrap(), "light green");
    }

    #[test]
    fn english_passes_through() {
        assert_eq!(GlossaryTranslator.translate("Navy").unwrap(), "navy");
        assert_eq!(GlossaryTranslator.translate("sea green").unwrap(), "sea green");
    }

    #[test]
    fn empty_phrase_fails() {
        assert_eq!(GlossaryTranslator.translate("   "), Err(TranslateError::EmptyPhrase));
    }
}
