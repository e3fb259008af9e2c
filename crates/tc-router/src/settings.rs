//! Router configuration.

/// Bus-network-wide timing settings, as supplied in the `routing_settings`
/// section of the build document.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouterSettings {
    /// Average bus speed, in km/h.
    pub bus_velocity_km_h: f64,
    /// Fixed wait time paid on every boarding, in minutes.
    pub bus_wait_time_min: u32,
}

impl RouterSettings {
    /// Bus speed converted to metres per minute.
    pub fn velocity_m_per_min(self) -> f64 {
        self.bus_velocity_km_h * 1000.0 / 60.0
    }
}
