use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

/// One palette entry as exposed over the API.
#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    /// Human-readable color name
    pub name: &'static str,
    /// Hex RGB value, e.g. "#B40000"
    pub rgb: String,
}

/// List the brick palette, in matching (declaration) order.
pub async fn handle_palette(State(state): State<AppState>) -> Json<Vec<PaletteEntry>> {
    let entries = state
        .palette
        .entries()
        .iter()
        .map(|e| PaletteEntry {
            name: e.name,
            rgb: format!("#{:02X}{:02X}{:02X}", e.rgb.r, e.rgb.g, e.rgb.b),
        })
        .collect();
    Json(entries)
}
