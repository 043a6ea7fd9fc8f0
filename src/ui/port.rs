//! The render port a concrete display backend implements.

use crate::error::EngineResult;

use super::SalaryView;

/// The injected presentation port.
///
/// The engine pushes a fresh [`SalaryView`] through this trait after every
/// recomputation. A backend writes each display value into the target tagged
/// with the matching field and period; how targets are located is entirely
/// the backend's business. Rendering is the one fallible seam in the crate —
/// a backend may be missing a target or fail to write to one.
///
/// # Example
///
/// ```
/// use paie_engine::error::EngineResult;
/// use paie_engine::ui::{RenderPort, SalaryView};
///
/// /// A backend that collects rendered views for inspection.
/// struct RecordingPort {
///     views: Vec<SalaryView>,
/// }
///
/// impl RenderPort for RecordingPort {
///     fn render(&mut self, view: &SalaryView) -> EngineResult<()> {
///         self.views.push(view.clone());
///         Ok(())
///     }
/// }
/// ```
pub trait RenderPort {
    /// Renders one view into the backend's display targets.
    fn render(&mut self, view: &SalaryView) -> EngineResult<()>;
}
