//! # Canvas Board
//!
//! Grid placement of the nine blocks and whole-canvas JSON export.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────┬─────────┬─────────┬─────────┬─────────┐
//! │ Key     │ Key     │ Value   │ Customer│ Customer│
//! │ Partners│ Activit.│ Propos. │ Relat.  │ Segments│
//! │         ├─────────┤         ├─────────┤         │
//! │         │ Key     │         │ Channels│         │
//! │         │ Resourc.│         │         │         │
//! ├─────────┴─────────┼─────────┴─────────┴─────────┤
//! │ Cost Structure    │ Revenue Streams             │
//! └───────────────────┴─────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::{BusinessCanvas, Slot};
use crate::error::CanvasError;

/// Number of grid columns.
pub const COLUMNS: u8 = 5;

/// Header label above each column.
pub const SECTION_LABELS: [&str; COLUMNS as usize] =
    ["Infrastructure", "Offering", "Customers", "Customers", "Finances"];

/// Placement of one block (1-based column/row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub slot: Slot,
    pub column: u8,
    pub row: u8,
    pub column_span: u8,
    pub row_span: u8,
    pub icon: &'static str,
}

const fn cell(slot: Slot, column: u8, row: u8, column_span: u8, row_span: u8, icon: &'static str) -> GridCell {
    GridCell {
        slot,
        column,
        row,
        column_span,
        row_span,
        icon,
    }
}

const LAYOUT: [GridCell; 9] = [
    cell(Slot::KeyPartners, 1, 1, 1, 2, "🤝"),
    cell(Slot::KeyActivities, 2, 1, 1, 1, "⚙️"),
    cell(Slot::ValuePropositions, 3, 1, 1, 2, "💡"),
    cell(Slot::CustomerRelationships, 4, 1, 1, 1, "👥"),
    cell(Slot::CustomerSegments, 5, 1, 1, 2, "🎯"),
    cell(Slot::KeyResources, 2, 2, 1, 1, "📦"),
    cell(Slot::Channels, 4, 2, 1, 1, "📡"),
    cell(Slot::CostStructure, 1, 3, 2, 1, "💸"),
    cell(Slot::RevenueStreams, 3, 3, 3, 1, "💰"),
];

/// Grid cells in row-major render order.
pub fn layout() -> &'static [GridCell] {
    &LAYOUT
}

/// Pretty-printed JSON of the whole canvas (camelCase keys).
pub fn export_json(canvas: &BusinessCanvas) -> Result<String, CanvasError> {
    Ok(serde_json::to_string_pretty(canvas)?)
}

/// `business-canvas-<YYYY-MM-DD>.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("business-canvas-{}.json", date.format("%Y-%m-%d"))
}

/// Write the export file into `dir` and return its path.
pub fn write_export(dir: &Path, canvas: &BusinessCanvas, date: NaiveDate) -> Result<PathBuf, CanvasError> {
    let path = dir.join(export_file_name(date));
    fs::write(&path, export_json(canvas)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layout_covers_every_slot_once() {
        let slots: HashSet<Slot> = layout().iter().map(|c| c.slot).collect();
        assert_eq!(slots.len(), 9);
        for slot in Slot::ALL {
            assert!(slots.contains(&slot));
        }
    }

    #[test]
    fn test_layout_fills_the_grid_without_overlap() {
        let mut occupied = HashSet::new();
        for c in layout() {
            for col in c.column..c.column + c.column_span {
                for row in c.row..c.row + c.row_span {
                    assert!(col <= COLUMNS);
                    assert!(occupied.insert((col, row)), "{} overlaps at {col},{row}", c.slot);
                }
            }
        }
        assert_eq!(occupied.len(), 15);
    }

    #[test]
    fn test_bottom_row_splits_two_to_three() {
        let cost = layout().iter().find(|c| c.slot == Slot::CostStructure).unwrap();
        let revenue = layout().iter().find(|c| c.slot == Slot::RevenueStreams).unwrap();
        assert_eq!((cost.column_span, revenue.column_span), (2, 3));
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "business-canvas-2024-03-07.json");
    }

    #[test]
    fn test_export_of_initial_canvas_round_trips() {
        let json = export_json(&BusinessCanvas::initial()).unwrap();
        assert!(json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 9);
        for slot in Slot::ALL {
            let block = &object[slot.camel_key()];
            assert_eq!(block["content"], serde_json::json!([]));
            assert_eq!(block["id"], slot.id());
        }
        let parsed: BusinessCanvas = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BusinessCanvas::initial());
    }

    #[test]
    fn test_write_export_creates_dated_file() {
        let dir = std::env::temp_dir().join(format!("bizcanvas-export-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        let path = write_export(&dir, &BusinessCanvas::initial(), date).unwrap();
        assert_eq!(path.file_name().unwrap(), "business-canvas-2025-12-31.json");
        let written: BusinessCanvas = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, BusinessCanvas::initial());

        fs::remove_dir_all(&dir).unwrap();
    }
}
