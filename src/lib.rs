// ============================================================================
// DUKANI - SALES MANAGEMENT FRONT END (RUST + YEW)
// ============================================================================
// Every screen follows the same lifecycle: fetch a collection on mount,
// render it, submit a form back to the same collection, refetch.
// - components: presenters, render view state only
// - hooks: loaders + mutators (fetch on mount, refetch after mutate)
// - services: SOLO HTTP communication with the backend
// - state: the view-state container shared by every screen
// - models: records exchanged verbatim with the backend + form staging
// ============================================================================

pub mod components;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
