//! In-memory canvas store backing the canvas API.
//!
//! Canvases are kept in insertion order; lookups are linear.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::remote::{CanvasPatch, RemoteCanvas};

#[derive(Debug, Default)]
pub struct CanvasStore {
    canvases: Vec<RemoteCanvas>,
}

impl CanvasStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.canvases
            .iter()
            .position(|c| c.id.as_deref() == Some(id))
    }

    /// Store a canvas, replacing any existing canvas with the same id.
    pub fn insert(&mut self, canvas: RemoteCanvas) {
        let existing = canvas.id.as_deref().and_then(|id| self.position(id));
        match existing {
            Some(idx) => self.canvases[idx] = canvas,
            None => self.canvases.push(canvas),
        }
    }

    pub fn list(&self) -> &[RemoteCanvas] {
        &self.canvases
    }

    pub fn get(&self, id: &str) -> Option<&RemoteCanvas> {
        self.position(id).map(|idx| &self.canvases[idx])
    }

    /// Apply a patch and bump `updated_at`.
    pub fn update(&mut self, id: &str, patch: CanvasPatch, now: NaiveDateTime) -> Option<&RemoteCanvas> {
        let idx = self.position(id)?;
        let canvas = &mut self.canvases[idx];
        patch.apply(canvas);
        canvas.updated_at = Some(now);
        Some(&*canvas)
    }

    pub fn remove(&mut self, id: &str) -> Option<RemoteCanvas> {
        self.position(id).map(|idx| self.canvases.remove(idx))
    }

    /// Copy a canvas under a new id with " (Copy)" appended to its name.
    pub fn duplicate(&mut self, id: &str, now: NaiveDateTime) -> Option<&RemoteCanvas> {
        let original = self.get(id)?;
        let mut copy = original.clone();
        copy.id = Some(Uuid::new_v4().to_string());
        copy.name = Some(format!("{} (Copy)", original.name.as_deref().unwrap_or_default()));
        copy.created_at = Some(now);
        copy.updated_at = Some(now);
        self.canvases.push(copy);
        self.canvases.last()
    }

    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }
}
