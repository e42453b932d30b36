/// Project records and their derived gallery cards
///
/// A `ProjectRecord` is the external input shape: one entry of the
/// `data/projects.json` feed. All fields are lenient — missing values fall
/// back to empty defaults so a malformed record still renders something.
///
/// A `Card` is the derived, display-ready entity. Cards are created once per
/// page session, in feed order, and only their visibility ever changes after
/// that (see `state::reveal`).

use serde::Deserialize;

/// One entry of the project feed, as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// A single-letter badge with its full-word label for tooltips.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub indicator: char,
    pub label: String,
}

/// Display-ready gallery entity derived from one `ProjectRecord`.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: Option<String>,
    /// Category, never empty — records without one get "uncategorized".
    pub category: String,
    /// Untruncated title, kept for the detail view and tooltips.
    pub title: String,
    /// Title as shown on the card (truncated past the configured limit).
    pub display_title: String,
    pub desc: String,
    pub display_desc: String,
    pub tech: Vec<String>,
    /// Thumbnail source, resolved as `image` field → first screenshot → none.
    pub thumbnail: Option<String>,
    /// Images shown by the lightbox. Falls back to the thumbnail when the
    /// record has no screenshots of its own.
    pub images: Vec<String>,
    pub live: Option<String>,
    pub badges: Vec<Badge>,
}

impl Card {
    /// Derive a card from a record. Pure and infallible — bad input degrades
    /// to empty strings rather than failing.
    pub fn from_record(record: &ProjectRecord, truncate_chars: usize) -> Self {
        let category = if record.category.trim().is_empty() {
            "uncategorized".to_string()
        } else {
            record.category.clone()
        };

        let thumbnail = record
            .image
            .clone()
            .or_else(|| record.screenshots.first().cloned());

        let images = if record.screenshots.is_empty() {
            thumbnail.iter().cloned().collect()
        } else {
            record.screenshots.clone()
        };

        let badges = record
            .badges
            .iter()
            .filter_map(|word| {
                let first = word.chars().next()?;
                Some(Badge {
                    indicator: first.to_uppercase().next().unwrap_or(first),
                    label: capitalize(word),
                })
            })
            .collect();

        Card {
            id: record.id.clone(),
            category,
            title: record.title.clone(),
            display_title: truncate_display(&record.title, truncate_chars),
            desc: record.desc.clone(),
            display_desc: truncate_display(&record.desc, truncate_chars),
            tech: record.tech.clone(),
            thumbnail,
            images,
            live: record.live.clone(),
            badges,
        }
    }

    /// Whether the display title had to be truncated (the full title is then
    /// surfaced through a tooltip).
    pub fn title_truncated(&self) -> bool {
        self.display_title != self.title
    }

    pub fn desc_truncated(&self) -> bool {
        self.display_desc != self.desc
    }
}

/// Derive all cards from the feed, preserving feed order.
pub fn derive_cards(records: &[ProjectRecord], truncate_chars: usize) -> Vec<Card> {
    records
        .iter()
        .map(|record| Card::from_record(record, truncate_chars))
        .collect()
}

/// Truncate a display string to `max_chars` characters, replacing the tail
/// with an ellipsis. Strings at or under the limit pass through unchanged.
pub fn truncate_display(full: &str, max_chars: usize) -> String {
    if full.chars().count() <= max_chars {
        return full.to_string();
    }
    let keep: String = full.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", keep.trim_end())
}

/// Uppercase the first character of a word, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: None,
            title: title.to_string(),
            desc: String::new(),
            category: category.to_string(),
            tech: vec![],
            screenshots: vec![],
            image: None,
            live: None,
            badges: vec![],
        }
    }

    #[test]
    fn test_empty_category_defaults_to_uncategorized() {
        let card = Card::from_record(&record("Thing", ""), 80);
        assert_eq!(card.category, "uncategorized");

        let card = Card::from_record(&record("Thing", "   "), 80);
        assert_eq!(card.category, "uncategorized");
    }

    #[test]
    fn test_long_title_truncates_to_77_chars_plus_ellipsis() {
        let title: String = "x".repeat(90);
        let card = Card::from_record(&record(&title, "web"), 80);

        assert_eq!(card.display_title, format!("{}...", "x".repeat(77)));
        assert_eq!(card.title, title);
        assert!(card.title_truncated());
    }

    #[test]
    fn test_short_title_passes_through() {
        let card = Card::from_record(&record("Short title", "web"), 80);
        assert_eq!(card.display_title, "Short title");
        assert!(!card.title_truncated());
    }

    #[test]
    fn test_truncation_trims_trailing_whitespace_before_ellipsis() {
        // 76 chars then a space at position 77: the space must not survive
        let title = format!("{} {}", "y".repeat(76), "z".repeat(20));
        let card = Card::from_record(&record(&title, "web"), 80);
        assert_eq!(card.display_title, format!("{}...", "y".repeat(76)));
    }

    #[test]
    fn test_thumbnail_prefers_image_field_over_screenshots() {
        let mut rec = record("Thing", "web");
        rec.image = Some("primary.png".into());
        rec.screenshots = vec!["a.png".into(), "b.png".into()];
        let card = Card::from_record(&rec, 80);

        assert_eq!(card.thumbnail.as_deref(), Some("primary.png"));
        // Screenshots still drive the lightbox list
        assert_eq!(card.images, vec!["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn test_lightbox_falls_back_to_thumbnail_without_screenshots() {
        let mut rec = record("Thing", "web");
        rec.image = Some("primary.png".into());
        let card = Card::from_record(&rec, 80);
        assert_eq!(card.images, vec!["primary.png".to_string()]);

        let card = Card::from_record(&record("Bare", "web"), 80);
        assert!(card.images.is_empty());
        assert!(card.thumbnail.is_none());
    }

    #[test]
    fn test_badges_get_indicator_and_label() {
        let mut rec = record("Thing", "web");
        rec.badges = vec!["featured".into(), "new".into(), "".into()];
        let card = Card::from_record(&rec, 80);

        assert_eq!(card.badges.len(), 2);
        assert_eq!(card.badges[0].indicator, 'F');
        assert_eq!(card.badges[0].label, "Featured");
        assert_eq!(card.badges[1].indicator, 'N');
    }

    #[test]
    fn test_records_deserialize_leniently() {
        let json = r#"[{"title": "Only a title"}, {}]"#;
        let records: Vec<ProjectRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Only a title");
        assert!(records[1].category.is_empty());
    }
}
