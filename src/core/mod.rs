pub mod alias;
pub mod coerce;
pub mod engine;
pub mod reader;
pub mod rules;
pub mod schema;

pub use crate::domain::model::{Address, User};
pub use crate::domain::ports::{ConfigProvider, Model, OutputSink, PayloadSource};
pub use crate::utils::error::Result;
