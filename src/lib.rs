pub mod views;
pub mod components;
pub mod utils;
pub mod storage;
#[cfg(not(target_arch = "wasm32"))]
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::utils::*;
#[cfg(not(target_arch = "wasm32"))]
pub use crate::configs::theme_store_path;
pub use crate::error::StoreError;
