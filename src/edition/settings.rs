//! Reader preferences: clarity (accessibility) and edition schedule.
//!
//! Both bundles are always complete. Collaborators change them by sending a
//! patch; `merge` overwrites only the fields the patch names.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Body text size used by the reading screens.
    pub fn points(&self) -> u8 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 18,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accessibility and display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaritySettings {
    #[serde(alias = "font_size")]
    pub font_size: FontSize,
    #[serde(alias = "high_contrast")]
    pub high_contrast: bool,
    #[serde(alias = "calm_mode")]
    pub calm_mode: bool,
    /// Drives the text-to-speech collaborator; the store never speaks.
    #[serde(alias = "read_aloud")]
    pub read_aloud: bool,
    #[serde(alias = "reduced_motion")]
    pub reduced_motion: bool,
}

impl ClaritySettings {
    pub fn merge(self, patch: &ClarityPatch) -> Self {
        Self {
            font_size: patch.font_size.unwrap_or(self.font_size),
            high_contrast: patch.high_contrast.unwrap_or(self.high_contrast),
            calm_mode: patch.calm_mode.unwrap_or(self.calm_mode),
            read_aloud: patch.read_aloud.unwrap_or(self.read_aloud),
            reduced_motion: patch.reduced_motion.unwrap_or(self.reduced_motion),
        }
    }

    pub fn get(&self, flag: ClarityFlag) -> bool {
        match flag {
            ClarityFlag::HighContrast => self.high_contrast,
            ClarityFlag::CalmMode => self.calm_mode,
            ClarityFlag::ReadAloud => self.read_aloud,
            ClarityFlag::ReducedMotion => self.reduced_motion,
        }
    }
}

/// Partial update for [`ClaritySettings`]. `None` leaves a field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClarityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calm_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_aloud: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

impl ClarityPatch {
    pub fn font_size(size: FontSize) -> Self {
        Self {
            font_size: Some(size),
            ..Self::default()
        }
    }

    /// Single-field patch setting one boolean preference.
    pub fn flag(flag: ClarityFlag, value: bool) -> Self {
        let mut patch = Self::default();
        patch.set(flag, value);
        patch
    }

    pub fn set(&mut self, flag: ClarityFlag, value: bool) {
        let slot = match flag {
            ClarityFlag::HighContrast => &mut self.high_contrast,
            ClarityFlag::CalmMode => &mut self.calm_mode,
            ClarityFlag::ReadAloud => &mut self.read_aloud,
            ClarityFlag::ReducedMotion => &mut self.reduced_motion,
        };
        *slot = Some(value);
    }
}

/// Boolean clarity preferences addressable by key.
///
/// `as_str()` is the camelCase wire key; `parse` also accepts snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClarityFlag {
    HighContrast,
    CalmMode,
    ReadAloud,
    ReducedMotion,
}

impl ClarityFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighContrast => "highContrast",
            Self::CalmMode => "calmMode",
            Self::ReadAloud => "readAloud",
            Self::ReducedMotion => "reducedMotion",
        }
    }

    pub fn all() -> &'static [ClarityFlag] {
        &[
            Self::HighContrast,
            Self::CalmMode,
            Self::ReadAloud,
            Self::ReducedMotion,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "highContrast" | "high_contrast" => Some(Self::HighContrast),
            "calmMode" | "calm_mode" => Some(Self::CalmMode),
            "readAloud" | "read_aloud" => Some(Self::ReadAloud),
            "reducedMotion" | "reduced_motion" => Some(Self::ReducedMotion),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighContrast => "High Contrast",
            Self::CalmMode => "Calm Mode",
            Self::ReadAloud => "Read Aloud (TTS)",
            Self::ReducedMotion => "Reduced Motion",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::HighContrast => "Increases text and background contrast",
            Self::CalmMode => "Reduces visual intensity and colors",
            Self::ReadAloud => "Text-to-speech for articles",
            Self::ReducedMotion => "Minimizes animations and transitions",
        }
    }
}

/// Which editions the notification scheduler should deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditionSettings {
    #[serde(alias = "morning_edition")]
    pub morning_edition: bool,
    #[serde(alias = "midday_edition")]
    pub midday_edition: bool,
    #[serde(alias = "evening_edition")]
    pub evening_edition: bool,
    #[serde(alias = "critical_updates")]
    pub critical_updates: bool,
}

impl Default for EditionSettings {
    fn default() -> Self {
        Self {
            morning_edition: true,
            midday_edition: true,
            evening_edition: true,
            critical_updates: true,
        }
    }
}

impl EditionSettings {
    pub fn merge(self, patch: &EditionPatch) -> Self {
        Self {
            morning_edition: patch.morning_edition.unwrap_or(self.morning_edition),
            midday_edition: patch.midday_edition.unwrap_or(self.midday_edition),
            evening_edition: patch.evening_edition.unwrap_or(self.evening_edition),
            critical_updates: patch.critical_updates.unwrap_or(self.critical_updates),
        }
    }

    pub fn get(&self, flag: ScheduleFlag) -> bool {
        match flag {
            ScheduleFlag::MorningEdition => self.morning_edition,
            ScheduleFlag::MiddayEdition => self.midday_edition,
            ScheduleFlag::EveningEdition => self.evening_edition,
            ScheduleFlag::CriticalUpdates => self.critical_updates,
        }
    }
}

/// Partial update for [`EditionSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning_edition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midday_edition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening_edition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_updates: Option<bool>,
}

impl EditionPatch {
    pub fn flag(flag: ScheduleFlag, value: bool) -> Self {
        let mut patch = Self::default();
        patch.set(flag, value);
        patch
    }

    pub fn set(&mut self, flag: ScheduleFlag, value: bool) {
        let slot = match flag {
            ScheduleFlag::MorningEdition => &mut self.morning_edition,
            ScheduleFlag::MiddayEdition => &mut self.midday_edition,
            ScheduleFlag::EveningEdition => &mut self.evening_edition,
            ScheduleFlag::CriticalUpdates => &mut self.critical_updates,
        };
        *slot = Some(value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleFlag {
    MorningEdition,
    MiddayEdition,
    EveningEdition,
    CriticalUpdates,
}

impl ScheduleFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MorningEdition => "morningEdition",
            Self::MiddayEdition => "middayEdition",
            Self::EveningEdition => "eveningEdition",
            Self::CriticalUpdates => "criticalUpdates",
        }
    }

    pub fn all() -> &'static [ScheduleFlag] {
        &[
            Self::MorningEdition,
            Self::MiddayEdition,
            Self::EveningEdition,
            Self::CriticalUpdates,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "morningEdition" | "morning_edition" | "morning" => Some(Self::MorningEdition),
            "middayEdition" | "midday_edition" | "midday" => Some(Self::MiddayEdition),
            "eveningEdition" | "evening_edition" | "evening" => Some(Self::EveningEdition),
            "criticalUpdates" | "critical_updates" | "critical" => Some(Self::CriticalUpdates),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MorningEdition => "Morning Edition",
            Self::MiddayEdition => "Midday What's New",
            Self::EveningEdition => "Evening Wrap",
            Self::CriticalUpdates => "Critical Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MorningEdition => "Start your day informed (7:00 AM)",
            Self::MiddayEdition => "Key updates during your day (12:00 PM)",
            Self::EveningEdition => "End of day summary (6:00 PM)",
            Self::CriticalUpdates => "Only if materially changed (max 1/day)",
        }
    }
}
