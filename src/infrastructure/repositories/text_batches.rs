use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s+|[。！？]+").expect("sentence boundary pattern"));

/// Split text into batches of at most `max_chars` characters.
///
/// Batches break on sentence boundaries where possible, then on whitespace,
/// and only cut inside a word when a single word is longer than the limit.
/// Lengths are counted in characters so multi-byte scripts are not split
/// mid-codepoint.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current = String::new();

    for sentence in sentences(text) {
        let sentence_len = char_len(sentence);

        if sentence_len > max_chars {
            flush(&mut batches, &mut current);
            batches.extend(split_on_words(sentence, max_chars));
            continue;
        }

        if !current.is_empty() && char_len(&current) + sentence_len > max_chars {
            flush(&mut batches, &mut current);
        }
        current.push_str(sentence);
    }

    flush(&mut batches, &mut current);
    batches
}

fn sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last_end = 0;

    for mat in SENTENCE_BOUNDARY.find_iter(text) {
        pieces.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }

    pieces
}

fn split_on_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        let word_len = char_len(word);

        if word_len > max_chars {
            flush(&mut batches, &mut current);
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                batches.push(chunk.iter().collect());
            }
            continue;
        }

        let separator = usize::from(!current.is_empty());
        if char_len(&current) + separator + word_len > max_chars {
            flush(&mut batches, &mut current);
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    flush(&mut batches, &mut current);
    batches
}

fn flush(batches: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        batches.push(trimmed.to_string());
    }
    current.clear();
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
