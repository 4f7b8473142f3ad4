pub mod common;
pub mod config;
pub mod provisioning;
pub mod routes;

pub mod clients;
pub mod contracts;
pub mod fields;
pub mod reports;
pub mod users;
pub mod wells;

#[cfg(test)]
pub mod test_helpers;
