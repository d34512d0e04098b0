use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io;
use url::Url;

/// The invite a player can pass to an opponent: the match URL plus a short
/// challenge blurb. Reads the current address and nothing else.
#[derive(Debug, Clone)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn for_match(url: &Url) -> Self {
        Self {
            title: "Challenge".to_owned(),
            text: "You have been challenged to a game of Tic Tac Toe!".to_owned(),
            url: url.to_string(),
        }
    }

    pub fn invite_line(&self) -> String {
        format!("{} {}", self.text, self.url)
    }
}

/// OSC 52 clipboard write: `ESC ] 52 ; c ; base64-data BEL`. The hosting
/// terminal owns the actual clipboard, so this works across SSH too.
pub fn clipboard_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

pub fn copy_to_clipboard(out: &mut impl io::Write, text: &str) -> io::Result<()> {
    out.write_all(clipboard_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_osc52_with_base64_payload() {
        assert_eq!(clipboard_sequence("abc"), "\x1b]52;c;YWJj\x07");
    }

    #[test]
    fn invite_line_carries_the_match_url() {
        let url = Url::parse("http://localhost:8080/room7").unwrap();
        let share = ShareData::for_match(&url);
        assert!(share.invite_line().ends_with("http://localhost:8080/room7"));
        assert_eq!(share.title, "Challenge");
    }
}
