use std::time::Duration;

// Serial transport. BAUD_RATE must match the sender's Serial.begin().
pub const PORT: &str = "/dev/ttyUSB0";
pub const BAUD_RATE: u32 = 9600;

// Wait after opening the port for the board's auto-reset to finish.
pub const STARTUP_DELAY: Duration = Duration::from_secs(2);
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

// Short pause per frame for keyboard input.
pub const RENDER_PAUSE: Duration = Duration::from_millis(10);

// Raw-line CSV log.
pub const OUTPUT_FILE: &str = "sensor_log.csv";
pub const CSV_HEADER: &str = "Time (s),Temp (°C),Humidity (%),CO2 (PPM),Volt (V),Current (mA)";

// Most recent points kept for the live charts.
pub const MAX_POINTS: usize = 50;

// Summary chart images written on exit.
pub const COMBINED_CHART: &str = "final_plot.png";
pub const TEMP_HUMIDITY_CHART: &str = "temp_humidity_plot.png";
pub const CO2_CHART: &str = "co2_plot.png";
pub const VOLTAGE_CURRENT_CHART: &str = "voltage_current_plot.png";
