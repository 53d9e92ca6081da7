use anyhow::{anyhow, Result};
use serde_json;

use crate::models::video::{CachedVideoList, VideoItem};

const VIDEO_CACHE_KEY: &str = "cached_videos";

/// Cached video lists older than this are refetched.
pub const VIDEO_CACHE_TTL_MS: i64 = 5 * 60 * 1000;

/// Wall-clock freshness rule. Both clocks are parameters so the expiry
/// boundary is testable without a browser.
pub fn cache_is_fresh(stored_at_ms: i64, now_ms: i64, ttl_ms: i64) -> bool {
    now_ms - stored_at_ms < ttl_ms
}

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Replace the cached video list wholesale, stamped with the current
/// wall clock. Storage being unavailable is logged and non-fatal.
pub fn store_video_cache(videos: &[VideoItem]) -> Result<()> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let record = CachedVideoList {
                videos: videos.to_vec(),
                timestamp: now_ms(),
            };
            let json = serde_json::to_string(&record)
                .map_err(|e| anyhow!("Failed to serialize video cache: {e:?}"))?;
            match storage.set_item(VIDEO_CACHE_KEY, &json) {
                Ok(_) => {}
                Err(e) => {
                    leptos::logging::error!("Failed to store video cache: {:?}", e);
                    return Err(anyhow!("Failed to store video cache: {e:?}"));
                }
            }
        }
    }
    Ok(())
}

/// The cached list, if present, parsable and still fresh.
pub fn get_cached_videos() -> Option<Vec<VideoItem>> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(VIDEO_CACHE_KEY).ok().flatten())
        .and_then(|json| serde_json::from_str::<CachedVideoList>(&json).ok())
        .filter(|record| cache_is_fresh(record.timestamp, now_ms(), VIDEO_CACHE_TTL_MS))
        .map(|record| record.videos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_is_fresh_just_before_the_ttl() {
        let written_at = 1_000_000;
        // T + 4min 59s
        assert!(cache_is_fresh(
            written_at,
            written_at + 4 * 60_000 + 59_000,
            VIDEO_CACHE_TTL_MS
        ));
    }

    #[test]
    fn entry_is_stale_just_after_the_ttl() {
        let written_at = 1_000_000;
        // T + 5min 1s
        assert!(!cache_is_fresh(
            written_at,
            written_at + 5 * 60_000 + 1_000,
            VIDEO_CACHE_TTL_MS
        ));
    }

    #[test]
    fn cache_record_round_trips_through_json() {
        let record = CachedVideoList {
            videos: vec![VideoItem {
                video_id: "abc123".to_string(),
                title: "Friday khutbah".to_string(),
                thumbnail_url: "https://i.ytimg.com/vi/abc123/mqdefault.jpg".to_string(),
                published_at: None,
            }],
            timestamp: 42,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: CachedVideoList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timestamp, 42);
        assert_eq!(parsed.videos[0].video_id, "abc123");
    }
}
