/// Uppercases `text` and returns its maximal runs of ASCII letters.
/// Everything else, punctuation and digits included, is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for letter in text.chars().flat_map(char::to_uppercase) {
        if letter.is_ascii_uppercase() {
            current.push(letter);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
