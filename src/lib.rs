pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod additional_tests;
