//! Platform abstraction layer
//!
//! Browser image loading lives here; native builds use
//! [`MemoryAssets`](crate::assets::MemoryAssets) instead.

#[cfg(any(target_arch = "wasm32", test))]
mod tickets;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::ImageLoader;
