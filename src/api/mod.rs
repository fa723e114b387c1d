//! HTTP access to the remote inference service.
//!
//! Both endpoints accept the same shape: a multipart body with a single
//! `file` part, answered by a small JSON object.

mod client;
mod error;
mod payload;

pub use client::InferenceClient;
pub use error::ClientError;
pub use payload::UploadPart;
