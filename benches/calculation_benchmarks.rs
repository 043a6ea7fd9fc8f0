//! Performance benchmarks for the Salary Simulation Engine.
//!
//! The engine recomputes on every keystroke, so the full event round-trip
//! (coerce, calculate, format, render) must stay comfortably within a UI
//! frame budget.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use paie_engine::calculation::calculate;
use paie_engine::display::format_eur;
use paie_engine::error::EngineResult;
use paie_engine::models::{EmploymentStatus, PayPeriod, SalaryInput};
use paie_engine::rates::RateTable;
use paie_engine::ui::{InputEvent, RenderPort, SalaryView, Simulator};

/// A port that drops every view, isolating the engine cost.
struct NullPort;

impl RenderPort for NullPort {
    fn render(&mut self, view: &SalaryView) -> EngineResult<()> {
        black_box(view);
        Ok(())
    }
}

fn bench_calculate(c: &mut Criterion) {
    let table = RateTable::france_2025();
    let input = SalaryInput::new(
        Decimal::from_str("60000").unwrap(),
        PayPeriod::Year,
        EmploymentStatus::Cadre,
    );

    c.bench_function("calculate_yearly_cadre", |b| {
        b.iter(|| calculate(black_box(&input), black_box(&table)))
    });
}

fn bench_format_eur(c: &mut Criterion) {
    let amount = Decimal::from_str("1234567.89").unwrap();

    c.bench_function("format_eur_seven_digits", |b| {
        b.iter(|| format_eur(black_box(amount)))
    });
}

fn bench_view_build(c: &mut Criterion) {
    let table = RateTable::france_2025();
    let input = SalaryInput::new(
        Decimal::from_str("3000").unwrap(),
        PayPeriod::Month,
        EmploymentStatus::NonCadre,
    );
    let breakdown = calculate(&input, &table);

    c.bench_function("view_from_breakdown", |b| {
        b.iter(|| SalaryView::from_breakdown(black_box(&breakdown)))
    });
}

fn bench_event_round_trip(c: &mut Criterion) {
    c.bench_function("event_round_trip", |b| {
        let mut simulator = Simulator::new(NullPort).expect("initial render failed");
        b.iter(|| {
            simulator
                .handle_event(InputEvent::AmountChanged(black_box("3000".to_string())))
                .expect("render failed")
        })
    });
}

criterion_group!(
    benches,
    bench_calculate,
    bench_format_eur,
    bench_view_build,
    bench_event_round_trip
);
criterion_main!(benches);
