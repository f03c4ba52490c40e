// Start of file: /src/page/mod.rs

/*
    * The display target side of the fetcher: a page exposes elements by
    * identifier and the fetcher writes the text content of exactly one of them.
*/

pub mod document;

pub use document::{Document, InMemoryDocument, PageError};

// End of file: /src/page/mod.rs
