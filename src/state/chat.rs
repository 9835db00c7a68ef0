//! Team chat transcripts

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

pub const WELCOME: &str = "Welcome to the team chat!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Me,
    System,
}

#[derive(Debug, Clone)]
pub struct ChatLine {
    pub author: Author,
    pub text: String,
    pub sent_at: Instant,
}

/// How much of a line is on screen at a given moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealedLine {
    pub author: Author,
    pub text: String,
    pub typing: bool,
}

impl ChatLine {
    /// Typing effect: one more character per `per_char` since the line was sent
    pub fn reveal(&self, now: Instant, per_char: Duration) -> RevealedLine {
        let total = self.text.chars().count();
        let shown = if per_char.is_zero() {
            total
        } else {
            let elapsed = now.saturating_duration_since(self.sent_at);
            let chars = elapsed.as_millis() / per_char.as_millis().max(1);
            usize::try_from(chars).unwrap_or(usize::MAX).min(total)
        };

        RevealedLine {
            author: self.author.clone(),
            text: self.text.chars().take(shown).collect(),
            typing: self.author != Author::Me && shown < total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatTranscript {
    lines: Vec<ChatLine>,
}

impl ChatTranscript {
    pub fn new(now: Instant) -> Self {
        Self {
            lines: vec![ChatLine {
                author: Author::System,
                text: WELCOME.to_string(),
                sent_at: now,
            }],
        }
    }

    /// Append a line from the user. Blank input is ignored.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.lines.push(ChatLine {
            author: Author::Me,
            text: text.to_string(),
            sent_at: now,
        });
        true
    }

    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    pub fn reveal(&self, now: Instant, per_char: Duration) -> Vec<RevealedLine> {
        self.lines.iter().map(|l| l.reveal(now, per_char)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PER_CHAR: Duration = Duration::from_millis(30);

    #[tokio::test(start_paused = true)]
    async fn test_welcome_types_out() {
        let transcript = ChatTranscript::new(Instant::now());

        let line = &transcript.reveal(Instant::now(), PER_CHAR)[0];
        assert_eq!(line.text, "");
        assert!(line.typing);

        tokio::time::sleep(Duration::from_millis(95)).await;
        let line = &transcript.reveal(Instant::now(), PER_CHAR)[0];
        assert_eq!(line.text, "Wel");
        assert!(line.typing);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let line = &transcript.reveal(Instant::now(), PER_CHAR)[0];
        assert_eq!(line.text, WELCOME);
        assert!(!line.typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_own_lines_never_show_typing_marker() {
        let mut transcript = ChatTranscript::new(Instant::now());
        assert!(transcript.send("  hi team  ", Instant::now()));

        let lines = transcript.reveal(Instant::now(), PER_CHAR);
        assert_eq!(lines[1].author, Author::Me);
        assert_eq!(lines[1].text, "");
        assert!(!lines[1].typing);

        tokio::time::sleep(Duration::from_millis(300)).await;
        let lines = transcript.reveal(Instant::now(), PER_CHAR);
        assert_eq!(lines[1].text, "hi team");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_ignored() {
        let mut transcript = ChatTranscript::new(Instant::now());
        assert!(!transcript.send("   ", Instant::now()));
        assert_eq!(transcript.lines().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_reveals_everything() {
        let transcript = ChatTranscript::new(Instant::now());
        let lines = transcript.reveal(Instant::now(), Duration::ZERO);
        assert_eq!(lines[0].text, WELCOME);
    }
}
