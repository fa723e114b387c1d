use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::intake::SelectedFile;
use crate::preview::thumbnail::Thumbnail;

/// Largest thumbnail kept per preview, in pixels.
const THUMBNAIL_MAX_WIDTH: u32 = 96;
const THUMBNAIL_MAX_HEIGHT: u32 = 72;

/// Identifier of a live preview, rendered like `preview:<uuid>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(Uuid);

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preview:{}", self.0)
    }
}

/// Everything the view needs to draw a selected file.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub name: String,
    pub size_label: String,
    /// Pixel dimensions, when the image could be decoded.
    pub dimensions: Option<(u32, u32)>,
    pub thumbnail: Option<Thumbnail>,
}

impl Preview {
    fn from_file(file: &SelectedFile) -> Self {
        let decoded = image::load_from_memory(file.bytes());
        let (dimensions, thumbnail) = match decoded {
            Ok(image) => (
                Some((image.width(), image.height())),
                Some(Thumbnail::from_image(
                    &image,
                    THUMBNAIL_MAX_WIDTH,
                    THUMBNAIL_MAX_HEIGHT,
                )),
            ),
            Err(err) => {
                tracing::debug!(name = file.name(), "No preview available: {err}");
                (None, None)
            }
        };

        Self {
            name: file.name().to_string(),
            size_label: file.size_label(),
            dimensions,
            thumbnail,
        }
    }
}

/// Registry of live previews, shared between pages and the renderer.
#[derive(Clone, Default)]
pub struct PreviewStore {
    entries: Arc<Mutex<HashMap<PreviewId, Arc<Preview>>>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `file` and register a new preview.
    ///
    /// The returned handle owns the entry; dropping it revokes the id.
    pub fn create(&self, file: &SelectedFile) -> PreviewHandle {
        let id = PreviewId(Uuid::new_v4());
        let preview = Arc::new(Preview::from_file(file));
        self.entries.lock().insert(id, preview);
        tracing::debug!(%id, name = file.name(), "Preview created");
        PreviewHandle {
            id,
            store: self.clone(),
        }
    }

    /// Look up a live preview. Revoked ids resolve to `None`.
    pub fn resolve(&self, id: PreviewId) -> Option<Arc<Preview>> {
        self.entries.lock().get(&id).cloned()
    }

    /// Number of previews not yet revoked.
    pub fn live_count(&self) -> usize {
        self.entries.lock().len()
    }

    fn revoke(&self, id: PreviewId) {
        if self.entries.lock().remove(&id).is_some() {
            tracing::debug!(%id, "Preview revoked");
        }
    }
}

/// Owning handle to one preview entry.
///
/// Deliberately not `Clone`: exactly one owner can revoke it.
pub struct PreviewHandle {
    id: PreviewId,
    store: PreviewStore,
}

impl PreviewHandle {
    pub fn id(&self) -> PreviewId {
        self.id
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle").field("id", &self.id).finish()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.store.revoke(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_file() -> SelectedFile {
        SelectedFile::new("not-really.png", "image/png", b"not an image".to_vec())
    }

    #[test]
    fn create_and_drop_revokes() {
        let store = PreviewStore::new();
        let handle = store.create(&text_file());
        let id = handle.id();
        assert_eq!(store.live_count(), 1);
        assert!(store.resolve(id).is_some());

        drop(handle);
        assert_eq!(store.live_count(), 0);
        assert!(store.resolve(id).is_none());
    }

    #[test]
    fn undecodable_file_still_gets_metadata() {
        let store = PreviewStore::new();
        let handle = store.create(&text_file());
        let preview = store.resolve(handle.id()).unwrap();
        assert_eq!(preview.name, "not-really.png");
        assert_eq!(preview.size_label, "0.0 MB");
        assert!(preview.dimensions.is_none());
        assert!(preview.thumbnail.is_none());
    }

    #[test]
    fn ids_are_unique_and_prefixed() {
        let store = PreviewStore::new();
        let a = store.create(&text_file());
        let b = store.create(&text_file());
        assert_ne!(a.id(), b.id());
        assert!(a.id().to_string().starts_with("preview:"));
    }
}
