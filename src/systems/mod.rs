mod air_data;
mod flight_dynamics;
mod forces;
mod powerplant;

pub use air_data::AirData;
pub use flight_dynamics::{flight_dynamics_system, step, StepError};
pub use forces::calculate_flight_forces;
pub use powerplant::{update_powerplant, PowerplantState};
