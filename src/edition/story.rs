use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque story identifier, stable for the lifetime of the story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single news item in an edition.
///
/// Everything except `id` and the two flags is display text; the store never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: StoryId,
    pub headline: String,
    pub summary: String,
    pub why_matters: String,
    pub whats_new: String,
    pub source: String,
    pub timestamp: String,
    pub read_time: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_saved: bool,
}

impl Story {
    /// Copy placed into the saved list.
    pub(crate) fn saved_copy(&self) -> Self {
        Self {
            is_saved: true,
            ..self.clone()
        }
    }
}

struct SeedStory {
    id: &'static str,
    headline: &'static str,
    summary: &'static str,
    why_matters: &'static str,
    whats_new: &'static str,
    source: &'static str,
    timestamp: &'static str,
    read_time: &'static str,
}

const SEED: &[SeedStory] = &[
    SeedStory {
        id: "1",
        headline: "Markets steady as rates hold",
        summary: "Central bankers kept rates unchanged. Analysts expect slower inflation over the next quarter.",
        why_matters: "Signals stability for borrowing and hiring.",
        whats_new: "Guidance shifted from 'uncertain' to 'cautiously improving'.",
        source: "Source A",
        timestamp: "2h ago",
        read_time: "30-45s",
    },
    SeedStory {
        id: "2",
        headline: "City unveils transit upgrades",
        summary: "Officials outlined phased improvements to reduce delays and expand coverage.",
        why_matters: "Could shorten commutes and improve reliability.",
        whats_new: "Funding approved for the first set of lines.",
        source: "Source B",
        timestamp: "3h ago",
        read_time: "45s",
    },
    SeedStory {
        id: "3",
        headline: "Health agency updates guidance",
        summary: "New recommendations focus on prevention and early screening.",
        why_matters: "Aims to reduce severe cases and costs.",
        whats_new: "Screening interval adjusted by six months.",
        source: "Source C",
        timestamp: "4h ago",
        read_time: "30s",
    },
    SeedStory {
        id: "4",
        headline: "Renewables hit new milestone",
        summary: "Wind and solar provided a larger share of power this quarter.",
        why_matters: "May lower long-term energy costs and emissions.",
        whats_new: "Grid operators added storage capacity.",
        source: "Source D",
        timestamp: "5h ago",
        read_time: "45s",
    },
    SeedStory {
        id: "5",
        headline: "Education results show gains",
        summary: "Test scores improved modestly in math and reading.",
        why_matters: "Suggests recovery efforts are working.",
        whats_new: "Largest gains in early grades.",
        source: "Source E",
        timestamp: "6h ago",
        read_time: "30-45s",
    },
    SeedStory {
        id: "6",
        headline: "Consumer prices ease slightly",
        summary: "Monthly price growth slowed compared with last month.",
        why_matters: "Relief for household budgets.",
        whats_new: "Core categories fell for the first time this year.",
        source: "Source F",
        timestamp: "7h ago",
        read_time: "45s",
    },
];

/// The built-in edition loaded at process start when no seed file is configured.
pub fn seed_stories() -> Vec<Story> {
    SEED.iter()
        .map(|s| Story {
            id: StoryId::new(s.id),
            headline: s.headline.to_string(),
            summary: s.summary.to_string(),
            why_matters: s.why_matters.to_string(),
            whats_new: s.whats_new.to_string(),
            source: s.source.to_string(),
            timestamp: s.timestamp.to_string(),
            read_time: s.read_time.to_string(),
            is_read: false,
            is_saved: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_six_unread_unsaved_stories() {
        let stories = seed_stories();
        assert_eq!(stories.len(), 6);
        assert!(stories.iter().all(|s| !s.is_read && !s.is_saved));
        let ids: Vec<&str> = stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn story_uses_camel_case_on_the_wire() {
        let story = &seed_stories()[0];
        let json = serde_json::to_value(story).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["whyMatters"], "Signals stability for borrowing and hiring.");
        assert_eq!(json["readTime"], "30-45s");
        assert_eq!(json["isSaved"], false);
    }

    #[test]
    fn flags_default_to_false_when_missing() {
        let json = r#"{
            "id": "x",
            "headline": "h",
            "summary": "s",
            "whyMatters": "w",
            "whatsNew": "n",
            "source": "src",
            "timestamp": "now",
            "readTime": "10s"
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, StoryId::new("x"));
        assert!(!story.is_read);
        assert!(!story.is_saved);
    }

    #[test]
    fn saved_copy_sets_flag_and_keeps_content() {
        let story = seed_stories().remove(2);
        let copy = story.saved_copy();
        assert!(copy.is_saved);
        assert_eq!(copy.id, story.id);
        assert_eq!(copy.headline, story.headline);
    }
}
