// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers shared by the binaries.
*/

pub mod error_handler;

// End of file: /src/utils/mod.rs
