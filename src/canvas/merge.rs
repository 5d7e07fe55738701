//! Merging a partial suggestion set into a canvas.

use super::{BusinessCanvas, PartialCanvas};

/// Combine `base` with `partial`, block by block.
///
/// A slot present in `partial` has its content replaced wholesale (no
/// concatenation); id, title and placeholder stay those of `base`. Slots
/// absent from `partial` pass through unchanged.
pub fn merge(base: &BusinessCanvas, partial: &PartialCanvas) -> BusinessCanvas {
    BusinessCanvas::from_fn(|slot| {
        let block = base.block(slot);
        match partial.content(slot) {
            Some(content) => block.with_content(content.to_vec()),
            None => block.clone(),
        }
    })
}
