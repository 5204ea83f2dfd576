use crate::StoreError;

/// Telemetry tables that are subject to retention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryTable {
    Temperature,
    SoilMoisture,
    FuelLevel,
    Npk,
    Gas,
    Rain,
}

impl TelemetryTable {
    pub const ALL: [TelemetryTable; 6] = [
        TelemetryTable::Temperature,
        TelemetryTable::SoilMoisture,
        TelemetryTable::FuelLevel,
        TelemetryTable::Npk,
        TelemetryTable::Gas,
        TelemetryTable::Rain,
    ];

    /// Stable key used in configuration files and admin responses.
    pub fn key(&self) -> &'static str {
        match self {
            TelemetryTable::Temperature => "temperature",
            TelemetryTable::SoilMoisture => "soil_moisture",
            TelemetryTable::FuelLevel => "fuel_level",
            TelemetryTable::Npk => "npk",
            TelemetryTable::Gas => "gas",
            TelemetryTable::Rain => "rain",
        }
    }

    /// Name operators use to address the collection through the admin API.
    pub fn display_name(&self) -> &'static str {
        match self {
            TelemetryTable::Temperature => "Temperature",
            TelemetryTable::SoilMoisture => "SoilMoisture",
            TelemetryTable::FuelLevel => "FuelLevel",
            TelemetryTable::Npk => "Npk",
            TelemetryTable::Gas => "Gas",
            TelemetryTable::Rain => "Rain",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            TelemetryTable::Temperature => "temperature_readings",
            TelemetryTable::SoilMoisture => "soil_moisture_readings",
            TelemetryTable::FuelLevel => "fuel_level_readings",
            TelemetryTable::Npk => "npk_readings",
            TelemetryTable::Gas => "gas_readings",
            TelemetryTable::Rain => "rain_readings",
        }
    }
}

impl std::fmt::Display for TelemetryTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for TelemetryTable {
    type Err = StoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TelemetryTable::ALL
            .iter()
            .find(|table| table.key() == s)
            .copied()
            .ok_or_else(|| StoreError::UnknownTable(s.to_string()))
    }
}
