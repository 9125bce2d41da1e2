//! Session orchestration for the preview pipeline
//!
//! A session runs the linear pipeline validate, resolve, plan, composite,
//! annotate. No step is retried and no step branches back; any failure
//! aborts the session with its originating error and no output canvas.
//! Sessions are single-threaded and treat the document as exclusively
//! owned for their duration.

/// Host environment state and scoped unit changes
pub mod environment;

use crate::document::model::Document;
use crate::document::resolve::{Confirm, resolve};
use crate::grid::compose::{PreviewCanvas, composite};
use crate::grid::highlight::annotate;
use crate::grid::plan::{TileConfig, plan};
use crate::io::error::{PreviewError, Result};
use crate::session::environment::{Environment, UnitScope};
use std::fmt;

/// Steps of the preview pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Confirm a document is open and pin environment settings
    ValidateEnvironment,
    /// Pick the source mode and extract the tile's pixels
    ResolveSource,
    /// Compute the canvas size and placement rectangles
    PlanGrid,
    /// Copy the tile into every placement
    Composite,
    /// Outline the reference tile
    Annotate,
}

impl SessionStep {
    /// Short label for progress display
    pub const fn label(self) -> &'static str {
        match self {
            Self::ValidateEnvironment => "validating environment",
            Self::ResolveSource => "resolving source",
            Self::PlanGrid => "planning grid",
            Self::Composite => "compositing tiles",
            Self::Annotate => "highlighting reference tile",
        }
    }
}

impl fmt::Display for SessionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives step notifications as a session progresses
pub trait SessionObserver {
    /// Called immediately before each pipeline step runs
    fn step_started(&mut self, step: SessionStep);
}

/// Observer that ignores all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn step_started(&mut self, _step: SessionStep) {}
}

/// One tiling preview run over a single document
///
/// On success the finished canvas is handed back to the caller; on any
/// failure no canvas is produced and the environment is left as it was
/// found. Ruler units are forced to pixels for the session and restored
/// unconditionally as the session's final action.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewSession {
    config: TileConfig,
}

impl PreviewSession {
    /// Create a session with the given tiling configuration
    pub const fn new(config: TileConfig) -> Self {
        Self { config }
    }

    /// The session's tiling configuration
    pub const fn config(&self) -> &TileConfig {
        &self.config
    }

    /// Run the pipeline to completion
    ///
    /// Declining the layer-group confirmation yields `Cancelled`, a clean
    /// exit rather than a failure; callers can distinguish it with
    /// [`PreviewError::is_cancellation`].
    ///
    /// # Errors
    ///
    /// `NoDocument` when `document` is absent, then whichever error the
    /// failing step produced: `EmptySource`, `Cancelled`, `InvalidConfig`,
    /// `CompositeFailure`, or `Annotation`.
    pub fn run(
        &self,
        environment: &mut Environment,
        document: Option<&Document>,
        confirm: &mut dyn Confirm,
        observer: &mut dyn SessionObserver,
    ) -> Result<PreviewCanvas> {
        // restores the caller's units on success, error, and cancellation
        let _units = UnitScope::pixels(environment);

        observer.step_started(SessionStep::ValidateEnvironment);
        let document = document.ok_or(PreviewError::NoDocument)?;

        observer.step_started(SessionStep::ResolveSource);
        let source = resolve(document, confirm)?;

        observer.step_started(SessionStep::PlanGrid);
        let grid = plan(source.dimensions, &self.config)?;

        observer.step_started(SessionStep::Composite);
        let mut canvas = composite(&source.content, &grid)?;

        observer.step_started(SessionStep::Annotate);
        annotate(&mut canvas, source.dimensions)?;

        Ok(canvas)
    }
}
