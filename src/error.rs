//! User-facing error taxonomy.
//!
//! Every error a page can show is one of these variants. The `Display`
//! output is exactly the text rendered under the input panel, so these
//! types never carry transport details; those are logged where the
//! request settles (see [`crate::request::reducer`]).
//!
//! A [`ValidationError`] is local page state and never touches the
//! request outcome; an [`ActionError`] is how a request ended.

use thiserror::Error;

use crate::request::Action;

/// Local, synchronous rejection. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The selected file does not declare an `image/*` media type.
    #[error("Please upload an image file (png, jpg, gif, etc.)")]
    NotAnImage,

    /// The summarize input is empty after trimming.
    #[error("Add some text before generating a summary.")]
    EmptyText,

    /// A browsed or dropped path could not be read.
    #[error("Could not read '{name}'.")]
    Unreadable { name: String },

    /// The clipboard holds no image.
    #[error("The clipboard does not contain an image.")]
    NoClipboardImage,
}

/// How a request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Connection failure, non-2xx status or malformed body. The user sees
    /// one generic message per action.
    #[error("An error occurred while generating the {}.", .action.noun())]
    Transport { action: Action },

    /// The summarize endpoint answered successfully but with no usable text.
    #[error("The summarization service returned an empty response.")]
    EmptyResult,
}
