//! Driving port for the learning roadmap.

use async_trait::async_trait;

use crate::domain::{Error, Stage, learning_roadmap, roadmap_stage};

/// Domain use-case port for reading roadmap stages.
#[async_trait]
pub trait RoadmapQuery: Send + Sync {
    /// Every stage, in order.
    async fn stages(&self) -> Result<Vec<Stage>, Error>;

    /// The stage at zero-based `index`, or a `not_found` error.
    async fn stage(&self, index: i64) -> Result<Stage, Error>;
}

/// Roadmap backed by the built-in stage list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRoadmapQuery;

#[async_trait]
impl RoadmapQuery for FixtureRoadmapQuery {
    async fn stages(&self) -> Result<Vec<Stage>, Error> {
        Ok(learning_roadmap().to_vec())
    }

    async fn stage(&self, index: i64) -> Result<Stage, Error> {
        roadmap_stage(index)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("stage {index} not found")))
    }
}
