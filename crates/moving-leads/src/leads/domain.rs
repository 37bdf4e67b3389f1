use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for generated leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeadId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Social platform a lead was (nominally) observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
    Mock,
}

impl Platform {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Mock => "mock",
        }
    }
}

/// Follow-up priority bucket derived from a lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }

    /// Recommended follow-up cadence for the tier.
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::High => "Immediate follow-up recommended",
            Self::Medium => "Schedule follow-up this week",
            Self::Low => "Monitor for additional signals",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A prospective customer and the observed signals behind their score.
///
/// `score` and `urgency` are fixed when the lead is built and are never
/// recomputed; construct leads through [`crate::leads::MockLeadFactory`] or
/// [`Lead::scored`] so both stay consistent with `signals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub location: String,
    pub platform: Platform,
    pub signals: Vec<String>,
    pub score: u8,
    pub urgency: Urgency,
    pub profile_url: String,
    pub timestamp: DateTime<Utc>,
}

/// Identity fields supplied when assembling a lead outside the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadIdentity {
    pub id: LeadId,
    pub name: String,
    pub location: String,
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
}

impl Lead {
    /// Builds a lead whose score and urgency are derived from `signals`.
    pub fn scored(identity: LeadIdentity, signals: Vec<String>) -> Self {
        let outcome = crate::leads::scoring::score(&signals);
        let LeadIdentity {
            id,
            name,
            location,
            platform,
            timestamp,
        } = identity;

        Self {
            id,
            email: email_for(&name),
            profile_url: profile_url_for(platform, &name),
            name,
            location,
            platform,
            signals,
            score: outcome.score,
            urgency: outcome.urgency,
            timestamp,
        }
    }
}

pub(crate) fn email_for(name: &str) -> String {
    format!("{}@example.com", name.replace(' ', ".").to_lowercase())
}

pub(crate) fn profile_url_for(platform: Platform, name: &str) -> String {
    format!(
        "https://{}.com/{}",
        platform.label(),
        name.to_lowercase().replacen(' ', "", 1)
    )
}
