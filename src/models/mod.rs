// Start of file: /src/models/mod.rs

/*
    * Wire model the hello backend serves.
*/

pub mod greeting;

pub use greeting::GreetingPayload;

// End of file: /src/models/mod.rs
