use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::error::InputError;

lazy_static! {
    static ref VIDEO_URL: Regex = Regex::new(
        r#"(?i)(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|shorts)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#
    )
    .expect("video URL pattern is valid");
}

const VIDEO_ID_LEN: usize = 11;

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pulls the video id out of a watch/embed/short link, or accepts a bare id.
pub fn extract_video_id(url_or_id: &str) -> Result<VideoId, InputError> {
    let input = url_or_id.trim();
    if input.is_empty() {
        return Err(InputError::EmptyUrl);
    }

    if let Some(captures) = VIDEO_URL.captures(input) {
        if let Some(id) = captures.get(1) {
            return Ok(VideoId(id.as_str().to_string()));
        }
    }

    if input.chars().count() == VIDEO_ID_LEN && !input.contains(['/', '=']) {
        return Ok(VideoId(input.to_string()));
    }

    Err(InputError::InvalidVideoId(input.to_string()))
}
