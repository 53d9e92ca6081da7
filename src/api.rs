use anyhow::{anyhow, Result as AnyhowResult};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::SITE;
use crate::models::video::VideoItem;

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Fetch and parse a JSON resource; used for the same-origin data
/// documents and the video API alike.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> AnyhowResult<T> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow!("Network error: {e:?}"))?;

    if !resp.ok() {
        return Err(anyhow!("HTTP {} {}", resp.status(), resp.status_text()));
    }

    resp.json::<T>()
        .await
        .map_err(|e| anyhow!("JSON error: {e:?}"))
}

fn api_url(endpoint: &str, params: &[(&str, &str)]) -> AnyhowResult<String> {
    let url = Url::parse_with_params(&format!("{YOUTUBE_API_BASE}/{endpoint}"), params)
        .map_err(|e| anyhow!("Bad API URL: {e}"))?;
    Ok(url.to_string())
}

/* --------------------------------------------------------------- */
/*  Video-platform response shapes                                 */
/* --------------------------------------------------------------- */

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, serde::Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    published_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    thumbnails: Thumbnails,
    #[serde(default)]
    resource_id: Option<ResourceId>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct Thumbnails {
    #[serde(default)]
    medium: Option<Thumbnail>,
    #[serde(default)]
    high: Option<Thumbnail>,
    #[serde(default)]
    default: Option<Thumbnail>,
}

#[derive(Debug, serde::Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    content_details: ContentDetails,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, serde::Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, serde::Deserialize)]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, serde::Deserialize)]
struct PlaylistItem {
    snippet: Snippet,
}

fn thumb_url(thumbnails: &Thumbnails) -> String {
    thumbnails
        .medium
        .as_ref()
        .or(thumbnails.high.as_ref())
        .or(thumbnails.default.as_ref())
        .map(|t| t.url.clone())
        .unwrap_or_default()
}

/* --------------------------------------------------------------- */
/*  Queries                                                        */
/* --------------------------------------------------------------- */

/// Live-broadcast search for the channel. Issued fresh on every page
/// load; the result is never cached so live detection cannot go stale.
pub async fn fetch_live_stream() -> AnyhowResult<Option<VideoItem>> {
    let url = api_url(
        "search",
        &[
            ("part", "snippet"),
            ("channelId", SITE.youtube_channel_id),
            ("eventType", "live"),
            ("type", "video"),
            ("maxResults", "1"),
            ("key", SITE.youtube_api_key),
        ],
    )?;

    let resp: SearchResponse = fetch_json(&url).await?;
    Ok(resp.items.into_iter().find_map(|item| {
        let video_id = item.id.video_id?;
        Some(VideoItem {
            video_id,
            title: item.snippet.title,
            thumbnail_url: thumb_url(&item.snippet.thumbnails),
            published_at: item.snippet.published_at,
        })
    }))
}

/// Resolve the channel's uploads playlist id.
async fn fetch_uploads_playlist() -> AnyhowResult<String> {
    let url = api_url(
        "channels",
        &[
            ("part", "contentDetails"),
            ("id", SITE.youtube_channel_id),
            ("key", SITE.youtube_api_key),
        ],
    )?;

    let resp: ChannelListResponse = fetch_json(&url).await?;
    resp.items
        .into_iter()
        .next()
        .map(|c| c.content_details.related_playlists.uploads)
        .ok_or_else(|| anyhow!("Channel not found"))
}

/// The channel's most recent uploads, newest first.
pub async fn fetch_recent_videos() -> AnyhowResult<Vec<VideoItem>> {
    let playlist_id = fetch_uploads_playlist().await?;
    let max_results = SITE.max_recent_videos.to_string();
    let url = api_url(
        "playlistItems",
        &[
            ("part", "snippet"),
            ("playlistId", &playlist_id),
            ("maxResults", &max_results),
            ("key", SITE.youtube_api_key),
        ],
    )?;

    let resp: PlaylistItemsResponse = fetch_json(&url).await?;
    Ok(resp
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.snippet.resource_id.as_ref()?.video_id.clone()?;
            Some(VideoItem {
                video_id,
                title: item.snippet.title,
                thumbnail_url: thumb_url(&item.snippet.thumbnails),
                published_at: item.snippet.published_at,
            })
        })
        .collect())
}
