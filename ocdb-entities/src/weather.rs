/// Current weather conditions as delivered by the weather gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub condition_text: String,
    pub condition_code: i32,
    pub temp_celsius: f64,
    pub wind_kph: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
}
