use chrono::{DateTime, Utc};

/// One uploaded (or live) video as rendered in the panel and cache.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoItem {
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// The localStorage cache record. Replaced wholesale on every refetch,
/// never patched field-by-field.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CachedVideoList {
    pub videos: Vec<VideoItem>,
    /// Wall-clock milliseconds at the time of the write.
    pub timestamp: i64,
}

/// data/spotlight.json
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightFile {
    #[serde(default)]
    pub video_spotlight: Option<VideoSpotlight>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSpotlight {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// What fills the featured carousel slide.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedVideo {
    pub video_id: String,
    pub title: String,
}

/// An enabled spotlight with a video id wins; otherwise the most recent
/// upload (the list arrives newest-first). None leaves the slide hidden.
pub fn featured_video(
    spotlight: Option<&VideoSpotlight>,
    videos: &[VideoItem],
) -> Option<FeaturedVideo> {
    if let Some(s) = spotlight {
        if s.enabled {
            if let Some(id) = s.video_id.as_ref().filter(|id| !id.is_empty()) {
                return Some(FeaturedVideo {
                    video_id: id.clone(),
                    title: s
                        .title
                        .clone()
                        .unwrap_or_else(|| "Featured video".to_string()),
                });
            }
        }
    }
    videos.first().map(|v| FeaturedVideo {
        video_id: v.video_id.clone(),
        title: v.title.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> VideoItem {
        VideoItem {
            video_id: id.to_string(),
            title: title.to_string(),
            thumbnail_url: String::new(),
            published_at: None,
        }
    }

    #[test]
    fn enabled_spotlight_wins_over_uploads() {
        let spotlight = VideoSpotlight {
            enabled: true,
            video_id: Some("spot1".to_string()),
            title: Some("Ramadan lecture".to_string()),
        };
        let videos = vec![video("up1", "Latest upload")];
        let featured = featured_video(Some(&spotlight), &videos).unwrap();
        assert_eq!(featured.video_id, "spot1");
        assert_eq!(featured.title, "Ramadan lecture");
    }

    #[test]
    fn disabled_spotlight_falls_back_to_latest_upload() {
        let spotlight = VideoSpotlight {
            enabled: false,
            video_id: Some("spot1".to_string()),
            title: None,
        };
        let videos = vec![video("up1", "Latest upload"), video("up2", "Older")];
        let featured = featured_video(Some(&spotlight), &videos).unwrap();
        assert_eq!(featured.video_id, "up1");
    }

    #[test]
    fn spotlight_without_video_id_falls_back() {
        let spotlight = VideoSpotlight {
            enabled: true,
            video_id: None,
            title: Some("Broken".to_string()),
        };
        let videos = vec![video("up1", "Latest upload")];
        assert_eq!(
            featured_video(Some(&spotlight), &videos).unwrap().video_id,
            "up1"
        );
    }

    #[test]
    fn no_spotlight_and_no_uploads_yields_none() {
        assert!(featured_video(None, &[]).is_none());
    }

    #[test]
    fn spotlight_file_parses_with_missing_section() {
        let file: SpotlightFile = serde_json::from_str("{}").unwrap();
        assert!(file.video_spotlight.is_none());

        let file: SpotlightFile = serde_json::from_str(
            r#"{"videoSpotlight": {"enabled": true, "videoId": "abc123", "title": "Khutbah"}}"#,
        )
        .unwrap();
        let s = file.video_spotlight.unwrap();
        assert!(s.enabled);
        assert_eq!(s.video_id.as_deref(), Some("abc123"));
    }
}
