//! Learning roadmap content.
//!
//! The roadmap is a fixed, ordered list of study stages. Stages are addressed
//! by zero-based position.

use serde::Serialize;

/// One stage of the learning roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    name: &'static str,
    description: &'static str,
    duration: &'static str,
    topics: &'static [&'static str],
}

impl Stage {
    const fn new(
        name: &'static str,
        description: &'static str,
        duration: &'static str,
        topics: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            description,
            duration,
            topics,
        }
    }

    /// Stage title.
    pub fn name(&self) -> &str {
        self.name
    }

    /// What the stage is for.
    pub fn description(&self) -> &str {
        self.description
    }

    /// Suggested time to spend, e.g. `"1 week"`.
    pub fn duration(&self) -> &str {
        self.duration
    }

    /// Topics covered, in study order.
    pub fn topics(&self) -> &[&'static str] {
        self.topics
    }
}

const STAGES: &[Stage] = &[
    Stage::new(
        "The Foundation",
        "Solid Rust and web fundamentals",
        "3-5 days",
        &["Ownership and traits", "Web basics (HTTP, JSON)"],
    ),
    Stage::new(
        "Quick Start",
        "Serve a first API and understand how parameters arrive",
        "3-5 days",
        &[
            "Project setup",
            "Path parameters",
            "Query parameters",
            "Typed request bodies",
        ],
    ),
    Stage::new(
        "Advanced request handling",
        "Handle more complex API interactions",
        "1 week",
        &["File uploads", "Cookies and headers", "Error handling"],
    ),
    Stage::new(
        "Database integration",
        "Persistent storage",
        "1-2 weeks",
        &["Query builders and ORMs", "Schema migrations", "Async SQL"],
    ),
    Stage::new(
        "Security and authentication",
        "Protect the API",
        "1 week",
        &["OAuth2", "JWT", "Password hashing"],
    ),
    Stage::new(
        "Deployment",
        "Ship to production",
        "1 week",
        &["Containers", "Process supervision", "Reverse proxies"],
    ),
];

/// Every stage, in order.
pub fn learning_roadmap() -> &'static [Stage] {
    STAGES
}

/// Stage at zero-based `index`, if any. Negative indices never match.
///
/// # Examples
/// ```
/// use userlab::domain::roadmap_stage;
///
/// assert_eq!(roadmap_stage(0).map(|stage| stage.name()), Some("The Foundation"));
/// assert!(roadmap_stage(-1).is_none());
/// ```
pub fn roadmap_stage(index: i64) -> Option<&'static Stage> {
    usize::try_from(index)
        .ok()
        .and_then(|position| STAGES.get(position))
}
