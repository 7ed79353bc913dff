use serde::{Deserialize, Serialize};

pub const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// One entry from a movie's video listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    #[serde(rename = "type")]
    pub video_type: String,
    pub site: String,
    pub key: String,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.video_type == "Trailer" && self.site == "YouTube"
    }

    /// Playable URL for YouTube-hosted videos.
    pub fn youtube_url(&self) -> String {
        format!("{}{}", YOUTUBE_WATCH_BASE, self.key)
    }
}

/// Select the trailer reference from a video listing: the first entry that
/// is a YouTube-hosted trailer. Absence is not an error.
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|v| v.is_youtube_trailer())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(video_type: &str, site: &str, key: &str) -> Video {
        Video {
            video_type: video_type.to_string(),
            site: site.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn test_select_trailer_picks_first_youtube_trailer() {
        let videos = vec![
            video("Teaser", "YouTube", "aaa"),
            video("Trailer", "Vimeo", "bbb"),
            video("Trailer", "YouTube", "ccc"),
            video("Trailer", "YouTube", "ddd"),
        ];
        let trailer = select_trailer(&videos).expect("trailer present");
        assert_eq!(trailer.key, "ccc");
        assert_eq!(trailer.youtube_url(), "https://www.youtube.com/watch?v=ccc");
    }

    #[test]
    fn test_select_trailer_absent_is_none() {
        let videos = vec![
            video("Teaser", "YouTube", "aaa"),
            video("Clip", "YouTube", "bbb"),
            video("Trailer", "Vimeo", "ccc"),
        ];
        assert!(select_trailer(&videos).is_none());
        assert!(select_trailer(&[]).is_none());
    }

    #[test]
    fn test_video_type_uses_wire_name() {
        let parsed: Video =
            serde_json::from_str(r#"{"type":"Trailer","site":"YouTube","key":"xyz"}"#).unwrap();
        assert!(parsed.is_youtube_trailer());
    }
}
