use lexicon_lib::vocabulary::Word;

/// ANSI color codes
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI color when color output is on
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Color for a difficulty tier, cooler for new words and green once mastered
pub fn difficulty_color(difficulty: u8) -> &'static str {
    match difficulty {
        0 => Color::MAGENTA,
        1 => Color::BLUE,
        2 => Color::YELLOW,
        3 => Color::GREEN,
        _ => Color::CYAN,
    }
}

/// Mastery label for a word, colored by tier
pub fn mastery_badge(word: &Word, use_color: bool) -> String {
    paint(
        word.mastery_level().label(),
        difficulty_color(word.difficulty),
        use_color,
    )
}

/// Cut `text` to `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Right-pad to `width` characters
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Word table with id, text, meaning, mastery and next review columns
pub fn render_word_table(words: &[Word], now: chrono::DateTime<chrono::Utc>, use_color: bool) -> String {
    let text_width = words
        .iter()
        .map(|w| w.text.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 24);
    let meaning_width = words
        .iter()
        .map(|w| w.meaning.chars().count())
        .max()
        .unwrap_or(7)
        .clamp(7, 32);
    let id_width = 5;
    let level_width = 10;

    let mut lines = Vec::new();
    lines.push(format!(
        "{} {} {} {} {}",
        pad("ID", id_width),
        pad("Word", text_width),
        pad("Meaning", meaning_width),
        pad("Level", level_width),
        "Next review"
    ));
    lines.push(format!(
        "{} {} {} {} {}",
        "\u{2500}".repeat(id_width),
        "\u{2500}".repeat(text_width),
        "\u{2500}".repeat(meaning_width),
        "\u{2500}".repeat(level_width),
        "\u{2500}".repeat(11)
    ));

    for word in words {
        let level = pad(word.mastery_level().label(), level_width);
        let next = lexicon_lib::vocabulary::algorithm::format_next_review(word.next_review, now);
        lines.push(format!(
            "{} {} {} {} {}",
            pad(&word.id.to_string(), id_width),
            pad(&truncate(&word.text, text_width), text_width),
            pad(&truncate(&word.meaning, meaning_width), meaning_width),
            paint(&level, difficulty_color(word.difficulty), use_color),
            paint(&next, Color::GRAY, use_color),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("considerably", 8), "consi...");
        assert_eq!(truncate("日本語のテキスト", 5), "日本...");
    }

    #[test]
    fn test_paint_without_color() {
        assert_eq!(paint("text", Color::RED, false), "text");
        assert_eq!(paint("text", Color::RED, true), "\x1b[31mtext\x1b[0m");
    }
}
