//! Property-based tests for the persona selector
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property
//! ```
//!
//! ## Test Modules
//!
//! - `selector_props`: selection state machine
//!   - Advance and retreat are inverses
//!   - `count` advances return to the start
//!   - Select always focuses and opens
//!   - Dismiss always closes and keeps focus
//!
//! - `carousel_props`: ring geometry and spring
//!   - Target rotation always brings the focused card to the front
//!   - Every card has a pose for every rotation
//!   - The spring settles on any target

mod carousel_props;
mod selector_props;
