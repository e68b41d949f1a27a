//! Helpers shared by the update handlers

use std::path::Path;

use anyhow::Context;

use crate::features::Settings;

/// Write settings to `path` on the calling thread
///
/// Saves run inside the update handler, one after another, so the file
/// always ends up holding the latest settings.
pub fn persist_settings(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    settings
        .save_to_file(path)
        .with_context(|| format!("failed to save settings to {}", path.display()))
}

/// Sleep, then hand `value` back; used for every delayed UI callback
pub async fn after<T>(delay: std::time::Duration, value: T) -> T {
    tokio::time::sleep(delay).await;
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_after_waits_for_delay() {
        let start = tokio::time::Instant::now();
        let value = after(Duration::from_millis(1500), 7).await;
        assert_eq!(value, 7);
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_persist_error_names_the_file() {
        let dir = std::env::temp_dir().join(format!("vision-helpers-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("mkdir");
        // A directory where the file should go makes the rename fail
        let path = dir.join("settings.json");
        std::fs::create_dir_all(&path).expect("blocker");

        let err = persist_settings(&Settings::default(), &path).expect_err("must fail");
        assert!(format!("{err:#}").contains("settings.json"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
