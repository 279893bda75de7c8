//! Static site content and the small amount of logic that drives it.
//!
//! Everything the frontend renders lives here: page navigation, hero and
//! section copy, and the code sample catalog with its selection state.
//! The crate has no leptos dependency so all of it is testable on the
//! native target.

pub mod features;
pub mod navigation;
pub mod samples;
pub mod site;
