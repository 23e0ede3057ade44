pub mod catalog;
pub mod configuration;
pub mod document_store;
pub mod domain;
pub mod newsletter;
pub mod routes;
pub mod startup;
pub mod telemetry;
