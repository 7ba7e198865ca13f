//! Core domain logic for suds
//!
//! This module contains the task and pipeline domain:
//!
//! - `models/` - Domain types (Task, PipelineSpec, StageConfig, FileEntry)
//! - `services/` - Task scheduling, source expansion, pipeline execution

pub mod models;
pub mod services;
