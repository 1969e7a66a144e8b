use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

use super::types::{MeasurementMethod, NewMeasurement, RingSizeMeasurement};

/// Maximum number of measurements retained; older rows are evicted
/// silently when a save pushes the history past this.
pub const HISTORY_CAP: usize = 10;

/// SQLite store for ring size measurements.
/// All operations are synchronous (rusqlite is blocking).
/// Callers in async contexts should use `tokio::task::spawn_blocking`.
///
/// The store assumes a single writer per session; concurrent writers from
/// a second app window resolve last-write-wins at truncation.
pub struct MeasurementHistory {
    conn: Connection,
}

impl MeasurementHistory {
    /// Create or open the measurement database.
    /// The db_path is the full path to the SQLite file.
    /// Typically called with: app.path().app_data_dir()?.join("measurements.db")
    pub fn new(db_path: &Path) -> Result<Self, String> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create data dir: {}", e))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| format!("Failed to open measurement db: {}", e))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS measurements (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                size TEXT NOT NULL,
                diameter_mm REAL NOT NULL,
                circumference_mm REAL NOT NULL,
                measurement_method TEXT NOT NULL,
                device_info_json TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| format!("Failed to create table: {}", e))?;

        Ok(Self { conn })
    }

    /// Persist a new measurement. Assigns the id and timestamp, then
    /// evicts everything older than the newest `HISTORY_CAP` rows.
    pub fn add(&self, measurement: &NewMeasurement) -> Result<RingSizeMeasurement, String> {
        let created_at = chrono::Utc::now().to_rfc3339();
        let device_info_json = measurement
            .device_info
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| format!("Failed to serialize device info: {}", e))?;

        self.conn
            .execute(
                "INSERT INTO measurements
                 (size, diameter_mm, circumference_mm, measurement_method, device_info_json, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    measurement.size,
                    measurement.diameter_mm,
                    measurement.circumference_mm,
                    measurement.measurement_method.as_str(),
                    device_info_json,
                    created_at,
                ],
            )
            .map_err(|e| format!("Failed to insert measurement: {}", e))?;

        let id = self.conn.last_insert_rowid();

        // Bounded retention
        self.conn
            .execute(
                "DELETE FROM measurements WHERE id NOT IN
                 (SELECT id FROM measurements ORDER BY id DESC LIMIT ?1)",
                params![HISTORY_CAP as i64],
            )
            .map_err(|e| format!("Failed to trim history: {}", e))?;

        info!(
            "Saved measurement {} (size {}, {:.2} mm)",
            id, measurement.size, measurement.diameter_mm
        );

        Ok(RingSizeMeasurement {
            id,
            size: measurement.size.clone(),
            diameter_mm: measurement.diameter_mm,
            circumference_mm: measurement.circumference_mm,
            measurement_method: measurement.measurement_method,
            device_info: measurement.device_info.clone(),
            created_at,
        })
    }

    /// All retained measurements, newest first.
    pub fn list(&self) -> Result<Vec<RingSizeMeasurement>, String> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, size, diameter_mm, circumference_mm, measurement_method,
                        device_info_json, created_at
                 FROM measurements ORDER BY id DESC",
            )
            .map_err(|e| format!("Failed to prepare query: {}", e))?;

        let rows = stmt
            .query_map([], row_to_measurement)
            .map_err(|e| format!("Failed to query measurements: {}", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect measurements: {}", e))
    }

    /// The most recent measurement, if any.
    pub fn latest(&self) -> Result<Option<RingSizeMeasurement>, String> {
        self.conn
            .query_row(
                "SELECT id, size, diameter_mm, circumference_mm, measurement_method,
                        device_info_json, created_at
                 FROM measurements ORDER BY id DESC LIMIT 1",
                [],
                row_to_measurement,
            )
            .optional()
            .map_err(|e| format!("Failed to query latest measurement: {}", e))
    }

    /// Remove a single measurement. Returns false (not an error) if the id
    /// was not present.
    pub fn remove(&self, id: i64) -> Result<bool, String> {
        let removed = self
            .conn
            .execute("DELETE FROM measurements WHERE id = ?1", params![id])
            .map_err(|e| format!("Failed to delete measurement: {}", e))?;
        Ok(removed > 0)
    }

    /// Empty the history.
    pub fn clear(&self) -> Result<(), String> {
        self.conn
            .execute("DELETE FROM measurements", [])
            .map_err(|e| format!("Failed to clear measurements: {}", e))?;
        info!("Cleared measurement history");
        Ok(())
    }
}

fn row_to_measurement(row: &Row) -> rusqlite::Result<RingSizeMeasurement> {
    let method: String = row.get(4)?;
    let device_info_json: Option<String> = row.get(5)?;

    Ok(RingSizeMeasurement {
        id: row.get(0)?,
        size: row.get(1)?,
        diameter_mm: row.get(2)?,
        circumference_mm: row.get(3)?,
        // Unrecognized method strings read as auto-detected
        measurement_method: MeasurementMethod::parse(&method)
            .unwrap_or(MeasurementMethod::AutoDetected),
        device_info: device_info_json.and_then(|json| serde_json::from_str(&json).ok()),
        created_at: row.get(6)?,
    })
}
