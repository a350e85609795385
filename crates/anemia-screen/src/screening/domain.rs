use std::fmt;

use serde::Serialize;

/// Population segment the person filling in the questionnaire belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileCategory {
    Parent,
    HealthAgent,
    Teenager,
    Adult,
}

impl ProfileCategory {
    pub const ALL: [ProfileCategory; 4] = [
        ProfileCategory::Parent,
        ProfileCategory::HealthAgent,
        ProfileCategory::Teenager,
        ProfileCategory::Adult,
    ];

    /// Resolve a wire key such as `health-agent`. Keys are matched exactly.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProfileCategory::Parent => "parent",
            ProfileCategory::HealthAgent => "health-agent",
            ProfileCategory::Teenager => "teenager",
            ProfileCategory::Adult => "adult",
        }
    }

    /// Title-case label used in indicators.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileCategory::Parent => "Parent",
            ProfileCategory::HealthAgent => "Agent de santé",
            ProfileCategory::Teenager => "Adolescent",
            ProfileCategory::Adult => "Adulte",
        }
    }

    /// Lower-case form used inside narrative sentences.
    pub fn narrative_name(&self) -> &'static str {
        match self {
            ProfileCategory::Parent => "parent",
            ProfileCategory::HealthAgent => "agent de santé",
            ProfileCategory::Teenager => "adolescent",
            ProfileCategory::Adult => "adulte",
        }
    }
}

/// Validated engine input shared by both analyzer variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningInput {
    pub profile: String,
    pub symptoms: Vec<String>,
    pub has_photos: bool,
}

impl ScreeningInput {
    pub fn new(profile: impl Into<String>, symptoms: Vec<String>, has_photos: bool) -> Self {
        Self {
            profile: profile.into(),
            symptoms,
            has_photos,
        }
    }

    /// Known category for the declared profile, `None` when the key is unrecognized.
    pub fn category(&self) -> Option<ProfileCategory> {
        ProfileCategory::from_key(&self.profile)
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }
}

/// Risk tier assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advice returned alongside a risk tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub general: Vec<String>,
    pub specific: Vec<String>,
}

/// Engine output before it is wrapped in a response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub risk_level: RiskLevel,
    pub confidence: u8,
    pub indicators: Vec<String>,
    pub details: String,
    pub recommendations: Recommendations,
    pub total_score: f64,
}
