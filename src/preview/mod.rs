//! Revocable preview references for the selected image.
//!
//! A [`PreviewStore`] plays the part of an object-URL registry: creating a
//! preview decodes the file once and returns a [`PreviewHandle`] whose id
//! the view resolves while rendering. Dropping the handle revokes the
//! entry. A page holds its handle in a [`PreviewSlot`], which releases the
//! old handle before binding a new one, so at most one reference per page
//! is live at any time and page teardown releases it automatically.

mod slot;
mod store;
mod thumbnail;

pub use slot::PreviewSlot;
pub use store::{Preview, PreviewHandle, PreviewId, PreviewStore};
pub use thumbnail::Thumbnail;
