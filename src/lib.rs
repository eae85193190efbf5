#[macro_use]
extern crate log;
#[macro_use]
extern crate derive_builder;
#[cfg(feature = "pg-storage")]
#[macro_use]
extern crate diesel;

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod resolver;
#[cfg(feature = "pg-storage")]
mod schema;
pub mod storage;

pub use config::{ResolverConfig, SourceResolution};
pub use error::{Error, Result};
pub use resolver::{RequestContext, Resolver};
