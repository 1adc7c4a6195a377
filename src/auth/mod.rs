//! Credential hashing shared by the driver and admin services.

pub mod password;
