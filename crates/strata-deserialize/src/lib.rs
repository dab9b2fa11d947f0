//! Strata IR deserializer
//!
//! Rebuilds the in-memory IR of a module from its encoded declaration
//! records, resolving symbols against an external descriptor universe.
//!
//! # Structure
//!
//! - `record` - Typed record schema and raw byte decoding
//! - `session` - Symbol resolution, loop registry and the type, expression,
//!   statement and declaration builders
//! - `loader` - Module and file loading through a `ByteReader`
//! - `config` - `DecoderConfig`, loadable from TOML
//! - `error` - `DecodeError` and `ConfigError`
//!
//! # Example
//!
//! ```ignore
//! let mut loader = ModuleLoader::new(universe);
//! let module = loader.load_module_bytes(&header, &|id| store.get(&id).cloned())?;
//! ```

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod loader;
pub mod record;
pub mod session;

pub use config::DecoderConfig;
pub use error::{ConfigError, DecodeError, DecodeResult};
pub use loader::{ByteReader, ModuleLoader};
pub use session::{DecodeSession, LoopRegistry};
