//! Report panels for a successful weather lookup.
//!
//! Each panel takes plain, already-cloned payload sections; the page
//! swaps the whole set whenever a new report lands, so nothing in here
//! holds reactive state beyond the trend chart's draw effect.

mod analysis;
mod city;
mod current;
mod forecast;
mod icons;
mod products;
mod risks;
mod trend;

pub use analysis::AnalysisPanel;
pub use city::CityPanel;
pub use current::CurrentPanel;
pub use forecast::ForecastPanel;
pub use products::ProductsPanel;
pub use risks::RisksPanel;
pub use trend::TrendPanel;
