pub mod controls;
pub mod flight_state;
pub mod forces;
pub mod spatial;

pub use controls::FlightControls;
pub use flight_state::FlightState;
pub use forces::FlightForces;
pub use spatial::SpatialComponent;
