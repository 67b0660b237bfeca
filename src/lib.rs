pub mod analysis;
pub mod args;
pub mod config;
pub mod controller;
pub mod gui;
pub mod headless;
pub mod selection;

#[cfg(test)]
mod test_fixture;

pub use analysis::PredictionClient;
pub use config::AppConfig;
pub use controller::Controller;
