mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_flight_state_valid, assert_forces_finite};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
