pub mod models;
pub mod plans;
pub mod production;
pub mod progress;
pub mod services;
#[cfg(test)]
mod tests;
pub mod views;
