// Floating toolbar placement.

// Vertical space between the toolbar's bottom edge and the selection's top edge.
pub const DEFAULT_GAP: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Fixed-position offsets (CSS pixels) of the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolbarGeometry {
    pub top: f64,
    pub left: f64,
}

impl ToolbarGeometry {
    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }
}

/// Place the toolbar `gap` above the selection, centered on its midpoint.
pub fn position(selection_box: Rect, toolbar_box: Size, gap: f64) -> ToolbarGeometry {
    ToolbarGeometry {
        top: selection_box.top - toolbar_box.height - gap,
        left: selection_box.left - toolbar_box.width / 2.0 + selection_box.width / 2.0,
    }
}
