use crate::config::AircraftConfig;

/// Throttle, fuel and engine power after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerplantState {
    /// Throttle setting [0-1]
    pub throttle: f64,
    /// Fuel remaining [throttle-s], floored at zero
    pub fuel_remaining: f64,
    /// Thrust the engine delivers this step [N]
    pub engine_power: f64,
}

/// Integrate the throttle lever and burn fuel for one step.
///
/// The lever moves at `throttle_change_rate` per second of full input and
/// clamps to [0, 1]. Burn is proportional to the new setting. A dry tank
/// cuts engine power to zero; the lever itself keeps responding so the
/// engine picks up again if fuel is ever added back.
pub fn update_powerplant(
    config: &AircraftConfig,
    throttle: f64,
    fuel_remaining: f64,
    throttle_input: f64,
    dt: f64,
) -> PowerplantState {
    let throttle = (throttle + throttle_input * dt * config.throttle_change_rate).clamp(0.0, 1.0);
    let fuel_remaining = (fuel_remaining - throttle * dt).max(0.0);
    let engine_power = if fuel_remaining > 0.0 {
        throttle * config.max_engine_power
    } else {
        0.0
    };

    PowerplantState {
        throttle,
        fuel_remaining,
        engine_power,
    }
}
