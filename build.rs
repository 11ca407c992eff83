const COMMANDS: &[&str] = &[
  "share",
  "share_to_app",
  "get_available_apps",
  "share_screenshot",
  "save_to_gallery",
];

fn main() {
  tauri_plugin::Builder::new(COMMANDS)
    .android_path("android")
    .ios_path("ios")
    .build();
}
