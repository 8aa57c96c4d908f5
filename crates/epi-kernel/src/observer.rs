//! Per-frame diagnostics hooks.
//!
//! The kernel reports state-change events through a [`FrameObserver`]
//! instead of logging directly; the outer loop decides whether that means
//! console lines, a metrics sink, or nothing.  All methods have default
//! no-op implementations and are only invoked with non-empty id lists.

use epi_core::{AgentId, Frame};

/// Callbacks invoked by [`infect`][crate::infect] and
/// [`resolve_frame`][crate::resolve_frame] after each pass.
pub trait FrameObserver {
    /// Agents newly infected this frame.
    fn on_infections(&mut self, _frame: Frame, _ids: &[AgentId]) {}

    /// Agents that recovered this frame.
    fn on_recoveries(&mut self, _frame: Frame, _ids: &[AgentId]) {}

    /// Agents that died this frame.
    fn on_deaths(&mut self, _frame: Frame, _ids: &[AgentId]) {}
}

/// A [`FrameObserver`] that does nothing.  Use when the caller does not want
/// per-frame event lines.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}

/// Prints one human-readable line per event class per frame — the kernel's
/// verbose mode.
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn raw(ids: &[AgentId]) -> Vec<u32> {
        ids.iter().map(|id| id.0).collect()
    }
}

impl FrameObserver for ConsoleReporter {
    fn on_infections(&mut self, frame: Frame, ids: &[AgentId]) {
        println!("at frame {} these agents got sick: {:?}", frame.0, Self::raw(ids));
    }

    fn on_recoveries(&mut self, frame: Frame, ids: &[AgentId]) {
        println!("at frame {} these agents recovered: {:?}", frame.0, Self::raw(ids));
    }

    fn on_deaths(&mut self, frame: Frame, ids: &[AgentId]) {
        println!("at frame {} these agents died: {:?}", frame.0, Self::raw(ids));
    }
}
