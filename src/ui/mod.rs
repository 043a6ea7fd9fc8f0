//! Presentation layer for the Salary Simulation Engine.
//!
//! This module contains the event-driven glue between the input form and the
//! pure calculation pipeline: the form input events, the view with its eight
//! formatted display values, the render port a concrete UI backend
//! implements, and the simulator that recomputes and re-renders on every
//! event.

mod events;
mod port;
mod simulator;
mod view;

pub use events::InputEvent;
pub use port::RenderPort;
pub use simulator::Simulator;
pub use view::{DisplayValue, OutputField, SalaryView};
