pub mod configuration;
pub mod contact_client;
pub mod contact_form;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utility;
