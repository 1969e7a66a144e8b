pub mod device;
pub mod estimator;
pub mod history;
pub mod sizing;

mod commands;
mod error;

pub use error::RingSizerError;
pub use estimator::{PpiEngine, PpiLookupResult};
pub use history::{MeasurementHistory, RingSizeMeasurement};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(estimator::PpiEngine::new(estimator::default_database()))
        .manage(sizing::default_chart())
        .invoke_handler(tauri::generate_handler![
            commands::device::detect_resolution,
            commands::device::check_scaling,
            commands::estimator::estimate_ppi,
            commands::sizing::list_sizes,
            commands::sizing::nearest_size,
            commands::sizing::diameter_for_size,
            commands::sizing::rendered_size_px,
            commands::history::save_measurement,
            commands::history::list_measurements,
            commands::history::latest_measurement,
            commands::history::delete_measurement,
            commands::history::clear_measurements,
            commands::calibration::set_calibrated_ppi,
            commands::calibration::get_calibrated_ppi,
            commands::calibration::clear_calibrated_ppi,
        ])
        .setup(|app| {
            // Announce a stored display calibration from preferences
            use tauri_plugin_store::StoreExt;
            if let Ok(store) = app.store(commands::calibration::PREFERENCES_FILE) {
                if let Some(ppi) = store
                    .get(commands::calibration::CALIBRATED_PPI_KEY)
                    .and_then(|v| v.as_f64())
                {
                    tracing::info!("Using stored display calibration: {:.1} PPI", ppi);
                }
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
