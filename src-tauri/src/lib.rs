mod settings;
mod upload;

use std::time::Duration;

#[tauri::command]
fn load_settings() -> settings::Settings { settings::load() }

#[tauri::command]
fn save_settings(settings: settings::Settings) -> Result<(), String> { settings::save(&settings) }

#[tauri::command]
async fn upload_video(request: upload::UploadVideoRequest) -> Result<upload::UploadedVideo, String> {
    let settings = settings::load();
    let delay = Duration::from_millis(u64::from(settings.upload_delay_ms));

    if settings.debug_logs {
        println!("upload_video: {} ({} bytes, {})", request.name, request.size, request.mime_type);
    }

    let result = upload::simulate_upload(request, delay).await;
    if let Err(e) = &result {
        eprintln!("upload_video failed: {}", e);
    }
    result
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            load_settings,
            save_settings,
            upload_video
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
