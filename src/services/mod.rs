//! Service layer: the pure computational core.
//!
//! Every function here takes value inputs and returns a value output; there
//! is no shared mutable state, no I/O, and no ambient clock. Callers supply
//! the `Moment` explicitly so results are exactly reproducible.

pub mod best_window;

pub mod sky_map;

pub mod star_position;

pub mod visibility;

pub use best_window::compute_best_window;
pub use sky_map::project_sky_map;
pub use star_position::{horizontal_position, star_position, HorizontalPosition};
pub use visibility::compute_visibility_report;
