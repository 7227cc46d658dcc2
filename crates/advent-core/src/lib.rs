//! Advent Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `advent`
//! day-scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           advent-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TokenRewriter)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Driven: Filesystem, Client, Converter) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     advent-adapters (Infrastructure)    │
//! │ (LocalFilesystem, AocClient, Converter) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │          (Day, Year, Session)           │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advent_core::{
//!     application::{Layout, ScaffoldService},
//!     domain::Day,
//! };
//!
//! // 1. Pick the day to scaffold
//! let day = Day::new(5)?;
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, client, converter, Layout::default());
//! service.scaffold(day, false)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Layout, ScaffoldService, TokenRewriter,
        ports::{DescriptionConverter, Filesystem, PuzzleClient},
    };
    pub use crate::domain::{Day, Session, Year};
    pub use crate::error::{AdventError, AdventResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
