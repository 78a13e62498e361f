// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (preparing a data directory or scoring a
// set of translations).
//
// Rules for this layer:
//   - No tensor math or alignment code here
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing or subprocess (Layers 4-6)
//   - Only workflow coordination
//
// Reference: Rust Book §7 (Module System)

// The corpus preparation workflow
pub mod prepare_use_case;

// The BLEU scoring workflow
pub mod score_use_case;
