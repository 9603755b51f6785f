//! Format interoperability for ankilab decks
//!
//!     This crate converts between decks (`Vec<Card>`) and the flat file formats cards travel
//!     in: the `Q:`/`A:` text models produce, tab-separated files for Anki/Noji import, comma or
//!     semicolon separated spreadsheets, numbered listings sent back to a model for review, and
//!     a structured deck package.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: discovery and selection of formats, by name or file extension
//!     - Format implementations: one module per format under `formats`
//!
//!     This is a pure lib: it powers ankilab-cli but assumes no shell environment, so no printing
//!     or env vars happen here. Callers read and write the files; the only file system access is
//!     the scratch directory the `.apkg` writer builds its SQLite collection in.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── common                  # Shared conversion utilities (line breaks, delimited io)
//!     ├── formats
//!     │   ├── <format>
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!
//! Lossiness
//!
//!     Line breaks inside fields are the one thing every format must carry. Single-line formats
//!     encode them as `<br>`, which decodes back exactly. The `prompt` listing is meant for
//!     model consumption only and cannot be parsed back.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
