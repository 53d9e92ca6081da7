use lazy_static::lazy_static;

use crate::models::hijri::HijriStrategy;

/// Site-wide constants, overridable at compile time through environment
/// variables (same option_env! pattern as the build stamp in lib.rs).
pub struct SiteConfig {
    pub org_name: &'static str,
    /// Restricted browser API key. An empty key degrades to an empty
    /// video list and "not live" rather than failing the page.
    pub youtube_api_key: &'static str,
    pub youtube_channel_id: &'static str,
    pub max_recent_videos: usize,
    pub spotlight_url: &'static str,
    pub events_url: &'static str,
    pub prayer_times_url: &'static str,
    pub hijri_calendar_url: &'static str,
    pub hijri_strategy: HijriStrategy,
}

lazy_static! {
    pub static ref SITE: SiteConfig = SiteConfig {
        org_name: option_env!("SITE_ORG_NAME").unwrap_or("Masjid An-Noor Islamic Centre"),
        youtube_api_key: option_env!("YOUTUBE_API_KEY").unwrap_or(""),
        youtube_channel_id: option_env!("YOUTUBE_CHANNEL_ID")
            .unwrap_or("UCn8rOaZ1kWGS3dW3rzUk0vQ"),
        max_recent_videos: 6,
        spotlight_url: "data/spotlight.json",
        events_url: "data/events.json",
        prayer_times_url: "data/prayer-times-2025.json",
        hijri_calendar_url: "data/hijri-calendar.json",
        hijri_strategy: HijriStrategy::CalendarRecord,
    };
}
