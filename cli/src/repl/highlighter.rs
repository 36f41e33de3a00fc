use std::borrow::Cow;

use owo_colors::OwoColorize;

const KEYWORDS: [&str; 18] = [
    "let", "const", "var", "function", "class", "extends", "if", "else", "while", "for",
    "return", "switch", "import", "export", "async", "await", "yield", "new",
];

pub fn highlight_line(line: &str) -> Cow<'_, str> {
    if !line.bytes().any(|b| b.is_ascii_alphabetic()) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut word = String::new();
    for ch in line.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            word.push(ch);
        } else {
            flush_word(&mut out, &mut word);
            out.push(ch);
        }
    }
    flush_word(&mut out, &mut word);
    Cow::Owned(out)
}

fn flush_word(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    if KEYWORDS.contains(&word.as_str()) {
        out.push_str(&word.blue().bold().to_string());
    } else {
        out.push_str(word);
    }
    word.clear();
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}
