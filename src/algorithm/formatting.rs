//! Turns a drawn word sequence into a punctuated sentence

/// Word that is lower-cased whenever it does not open the sentence
const FIRST_PERSON: &str = "Je";

/// Upper-case the first character of a word, leaving the rest untouched
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Build the sentence for a sequence of words
///
/// The first word is capitalized, any later `"Je"` becomes `"je"`, words are
/// joined by single spaces and a single period terminates the sentence.
/// Returns `None` when there is nothing to format.
pub fn format_sentence<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let (first, rest) = words.split_first()?;

    let mut sentence = capitalize_first(first.as_ref());
    for word in rest {
        let word = word.as_ref();
        sentence.push(' ');
        if word == FIRST_PERSON {
            sentence.push_str(&FIRST_PERSON.to_lowercase());
        } else {
            sentence.push_str(word);
        }
    }
    sentence.push('.');

    Some(sentence)
}
