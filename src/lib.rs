pub mod behaviors;
mod configs;
#[cfg(target_arch = "wasm32")]
pub mod dom;
mod error;
mod routes;
pub mod store;
mod utils;
mod views;

#[cfg(test)]
mod tests;

pub use crate::configs::*;
pub use crate::error::FxError;
pub use crate::routes::*;
pub use crate::utils::*;
