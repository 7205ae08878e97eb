//! Command implementations

pub mod analyze;
pub mod optimal;
pub mod simulate;
pub mod suggest;

pub use analyze::{AnalysisReport, analyze_word};
pub use optimal::{
    EXACT_SEARCH_COMFORT_LIMIT, GuessReport, OptimalReport, exact_guess_report, exact_report,
};
pub use simulate::{SimulateConfig, SimulationResult, SimulationStep, simulate_game};
pub use suggest::run_suggest;
