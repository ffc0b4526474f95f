// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Product Reviews Fetch
//!
//! Blocking HTTP plumbing for the product-reviews system.
//!
//! Providers that fetch over the network go through this crate so the
//! transport can be swapped out in tests:
//!
//! - [`HttpTransport`] - trait for performing one GET per call
//! - [`ReqwestTransport`] - the real transport (blocking reqwest)
//! - [`HttpClient`] - thin wrapper with JSON helpers
//! - [`ReplayTransport`] / [`Recorder`] - deterministic record/replay of
//!   HTTP interactions for provider tests
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use product_reviews_fetch::{HttpClient, ReplayTransport, RecordedInteraction};
//!
//! let transport = ReplayTransport::new(vec![RecordedInteraction {
//!     url: "https://shop.example/api/reviews".into(),
//!     status: 200,
//!     body: r#"{"items": []}"#.into(),
//! }]);
//! let client = HttpClient::with_transport(Arc::new(transport));
//! let document = client.get_json("https://shop.example/api/reviews")?;
//! ```

pub mod client;
pub mod error;
pub mod replay;
pub mod transport;

// Re-export key types at crate root
pub use client::HttpClient;
pub use error::HttpError;
pub use replay::{RecordedInteraction, Recorder, ReplayTransport};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
