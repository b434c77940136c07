//! Domain logic for the city admin service.
//!
//! Everything here is pure: no database, no HTTP. The field schema in
//! [`city`] is shared by the server-side rule set and the form state model.

pub mod city;
pub mod error;
pub mod types;
