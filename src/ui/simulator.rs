//! The event-driven simulator.
//!
//! The simulator owns the current form state and the render port, and runs
//! the calculate-then-render cycle: once at construction with the empty
//! defaults, then once per input event. Everything is synchronous and runs
//! to completion before the next event is handled; there is no shared
//! mutable state and no suspension point.

use tracing::debug;

use crate::calculation::calculate;
use crate::error::EngineResult;
use crate::models::{EmploymentStatus, PayPeriod, SalaryBreakdown, SalaryInput};
use crate::rates::RateTable;

use super::{InputEvent, RenderPort, SalaryView};

/// The event-driven salary simulator.
///
/// # Example
///
/// ```
/// use paie_engine::error::EngineResult;
/// use paie_engine::models::PayPeriod;
/// use paie_engine::ui::{InputEvent, OutputField, RenderPort, SalaryView, Simulator};
///
/// struct LastView(Option<SalaryView>);
///
/// impl RenderPort for LastView {
///     fn render(&mut self, view: &SalaryView) -> EngineResult<()> {
///         self.0 = Some(view.clone());
///         Ok(())
///     }
/// }
///
/// let mut simulator = Simulator::new(LastView(None)).unwrap();
/// simulator
///     .handle_event(InputEvent::AmountChanged("3000".to_string()))
///     .unwrap();
/// let view = simulator.port().0.as_ref().unwrap();
/// assert_eq!(
///     view.text_for(OutputField::Net, PayPeriod::Month),
///     Some("2\u{202F}340\u{A0}€")
/// );
/// ```
pub struct Simulator<P: RenderPort> {
    amount_raw: String,
    period: PayPeriod,
    status: EmploymentStatus,
    rates: RateTable,
    port: P,
}

impl<P: RenderPort> Simulator<P> {
    /// Creates a simulator with the default rate table and performs the
    /// initial render: empty amount, monthly period, non-cadre status.
    pub fn new(port: P) -> EngineResult<Self> {
        Self::with_rates(port, RateTable::default())
    }

    /// Creates a simulator with an explicit rate table and performs the
    /// initial render.
    pub fn with_rates(port: P, rates: RateTable) -> EngineResult<Self> {
        let mut simulator = Self {
            amount_raw: String::new(),
            period: PayPeriod::Month,
            status: EmploymentStatus::NonCadre,
            rates,
            port,
        };
        simulator.refresh()?;
        Ok(simulator)
    }

    /// Applies one input event, recomputes the breakdown, and renders it.
    pub fn handle_event(&mut self, event: InputEvent) -> EngineResult<()> {
        debug!(event = ?event, "Handling input event");
        match event {
            InputEvent::AmountChanged(raw) => self.amount_raw = raw,
            InputEvent::PeriodChanged(period) => self.period = period,
            InputEvent::StatusChanged(status) => self.status = status,
        }
        self.refresh()
    }

    /// Recomputes the breakdown for the current form state without going
    /// through the port.
    pub fn breakdown(&self) -> SalaryBreakdown {
        calculate(&self.current_input(), &self.rates)
    }

    /// The raw text currently in the amount field.
    pub fn amount_raw(&self) -> &str {
        &self.amount_raw
    }

    /// The currently selected period.
    pub fn period(&self) -> PayPeriod {
        self.period
    }

    /// The currently selected employment status.
    pub fn status(&self) -> EmploymentStatus {
        self.status
    }

    /// A reference to the render port, for backends that expose state.
    pub fn port(&self) -> &P {
        &self.port
    }

    fn current_input(&self) -> SalaryInput {
        SalaryInput::from_raw(&self.amount_raw, self.period, self.status)
    }

    fn refresh(&mut self) -> EngineResult<()> {
        let breakdown = self.breakdown();
        let view = SalaryView::from_breakdown(&breakdown);
        self.port.render(&view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::ui::OutputField;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Records every rendered view.
    struct RecordingPort {
        views: Vec<SalaryView>,
    }

    impl RecordingPort {
        fn new() -> Self {
            Self { views: Vec::new() }
        }

        fn last(&self) -> &SalaryView {
            self.views.last().expect("no view rendered")
        }
    }

    impl RenderPort for RecordingPort {
        fn render(&mut self, view: &SalaryView) -> EngineResult<()> {
            self.views.push(view.clone());
            Ok(())
        }
    }

    /// Fails every render.
    struct BrokenPort;

    impl RenderPort for BrokenPort {
        fn render(&mut self, _view: &SalaryView) -> EngineResult<()> {
            Err(EngineError::RenderFailed {
                target: "val-gross".to_string(),
                message: "node detached".to_string(),
            })
        }
    }

    /// SM-001: construction renders once with all-zero values
    #[test]
    fn test_initial_render_is_zero() {
        let simulator = Simulator::new(RecordingPort::new()).unwrap();
        assert_eq!(simulator.port().views.len(), 1);
        assert_eq!(simulator.port().last().breakdown, SalaryBreakdown::zero());
    }

    /// SM-002: every event triggers exactly one render
    #[test]
    fn test_each_event_renders_once() {
        let mut simulator = Simulator::new(RecordingPort::new()).unwrap();
        simulator
            .handle_event(InputEvent::AmountChanged("3000".to_string()))
            .unwrap();
        simulator
            .handle_event(InputEvent::PeriodChanged(PayPeriod::Year))
            .unwrap();
        simulator
            .handle_event(InputEvent::StatusChanged(EmploymentStatus::Cadre))
            .unwrap();
        assert_eq!(simulator.port().views.len(), 4);
    }

    /// SM-003: amount event recomputes the breakdown
    #[test]
    fn test_amount_event_recomputes() {
        let mut simulator = Simulator::new(RecordingPort::new()).unwrap();
        simulator
            .handle_event(InputEvent::AmountChanged("3000".to_string()))
            .unwrap();
        let view = simulator.port().last();
        assert_eq!(view.breakdown.gross_monthly, dec("3000"));
        assert_eq!(
            view.text_for(OutputField::TotalCost, PayPeriod::Month),
            Some("4\u{202F}260\u{A0}€")
        );
    }

    /// SM-004: selector state persists across later events
    #[test]
    fn test_selector_state_persists() {
        let mut simulator = Simulator::new(RecordingPort::new()).unwrap();
        simulator
            .handle_event(InputEvent::PeriodChanged(PayPeriod::Year))
            .unwrap();
        simulator
            .handle_event(InputEvent::StatusChanged(EmploymentStatus::Cadre))
            .unwrap();
        simulator
            .handle_event(InputEvent::AmountChanged("60000".to_string()))
            .unwrap();
        let view = simulator.port().last();
        assert_eq!(view.breakdown.gross_monthly, dec("5000"));
        assert_eq!(view.breakdown.net_after_tax_monthly, dec("3562.5"));
    }

    /// SM-005: invalid amount text renders zeros, not an error
    #[test]
    fn test_invalid_amount_renders_zeros() {
        let mut simulator = Simulator::new(RecordingPort::new()).unwrap();
        simulator
            .handle_event(InputEvent::AmountChanged("not a number".to_string()))
            .unwrap();
        assert_eq!(simulator.port().last().breakdown, SalaryBreakdown::zero());
    }

    /// SM-006: a failing port surfaces the render error
    #[test]
    fn test_broken_port_surfaces_error() {
        let result = Simulator::new(BrokenPort);
        match result {
            Err(EngineError::RenderFailed { target, .. }) => assert_eq!(target, "val-gross"),
            other => panic!("Expected RenderFailed, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_breakdown_matches_last_rendered_view() {
        let mut simulator = Simulator::new(RecordingPort::new()).unwrap();
        simulator
            .handle_event(InputEvent::AmountChanged("2500,50".to_string()))
            .unwrap();
        assert_eq!(simulator.breakdown(), simulator.port().last().breakdown);
    }

    #[test]
    fn test_accessors_reflect_form_state() {
        let mut simulator = Simulator::new(RecordingPort::new()).unwrap();
        assert_eq!(simulator.amount_raw(), "");
        assert_eq!(simulator.period(), PayPeriod::Month);
        assert_eq!(simulator.status(), EmploymentStatus::NonCadre);

        simulator
            .handle_event(InputEvent::AmountChanged("100".to_string()))
            .unwrap();
        simulator
            .handle_event(InputEvent::PeriodChanged(PayPeriod::Year))
            .unwrap();
        assert_eq!(simulator.amount_raw(), "100");
        assert_eq!(simulator.period(), PayPeriod::Year);
    }
}
