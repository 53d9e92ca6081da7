/// data/events.json: two independent sections, each shown only when its
/// enabled flag is explicitly true. A failed fetch or parse hides both.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsConfig {
    #[serde(default)]
    pub notification_bar: Option<NotificationBar>,
    #[serde(default)]
    pub spotlight: Option<EventSpotlight>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBar {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub link_text: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSpotlight {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
}

impl EventsConfig {
    pub fn notification_visible(&self) -> bool {
        self.notification_bar.as_ref().is_some_and(|b| b.enabled)
    }

    pub fn spotlight_visible(&self) -> bool {
        self.spotlight.as_ref().is_some_and(|s| s.enabled)
    }
}

/// Split an em-dash-delimited banner text into the emphasized lead and
/// the remainder: "Eid — Join us" renders <strong>Eid</strong> — Join us.
/// Text without an em-dash (or with nothing before it) is not split.
pub fn split_emphasis(text: &str) -> Option<(String, String)> {
    let (lead, rest) = text.split_once('—')?;
    let lead = lead.trim_end();
    if lead.is_empty() {
        return None;
    }
    Some((lead.to_string(), rest.trim_start().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_section_is_hidden_regardless_of_other_fields() {
        let json = r#"{
            "notificationBar": {"enabled": false, "linkText": "Eid — Join us", "linkUrl": "/events"},
            "spotlight": {"enabled": false, "title": "Eid Salah", "date": "2025-03-31"}
        }"#;
        let config: EventsConfig = serde_json::from_str(json).unwrap();
        assert!(!config.notification_visible());
        assert!(!config.spotlight_visible());
    }

    #[test]
    fn missing_section_is_hidden() {
        let config: EventsConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.notification_visible());
        assert!(!config.spotlight_visible());
    }

    #[test]
    fn enabled_section_is_visible() {
        let json = r#"{"notificationBar": {"enabled": true, "linkText": "Eid — Join us"}}"#;
        let config: EventsConfig = serde_json::from_str(json).unwrap();
        assert!(config.notification_visible());
        assert_eq!(
            config.notification_bar.unwrap().link_text.as_deref(),
            Some("Eid — Join us")
        );
    }

    #[test]
    fn em_dash_text_splits_into_lead_and_remainder() {
        let (lead, rest) = split_emphasis("Eid — Join us").unwrap();
        assert_eq!(lead, "Eid");
        assert_eq!(rest, "Join us");
    }

    #[test]
    fn plain_text_does_not_split() {
        assert!(split_emphasis("Jumu'ah at 13:00").is_none());
        assert!(split_emphasis("— trailing only").is_none());
    }
}
