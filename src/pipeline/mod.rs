//! Game driving, training and evaluation pipelines
//!
//! This module provides:
//! - The single-game driver that seats two agents
//! - Training runs against one opponent or a multi-block regimen
//! - Observers for progress and metrics

pub mod driver;
pub mod observers;
pub mod regimen;
pub mod training;

pub use driver::GameDriver;
pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use regimen::{DEFAULT_PHASE_GAMES, OpponentType, TrainingBlock, TrainingRegimen};
pub use training::{PhaseResult, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Agent, Observer};
