use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use veld_noise::NoiseParams;

/// Spawns a watcher thread that pings the returned channel whenever the
/// config file changes. Pings carry no payload; the reload path re-reads the
/// file.
pub fn spawn_config_watcher(path: PathBuf) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        if let Ok(mut watcher) =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    match event.kind {
                        EventKind::Modify(_)
                        | EventKind::Create(_)
                        | EventKind::Remove(_)
                        | EventKind::Any => {
                            let _ = tx.send(());
                        }
                        _ => {}
                    }
                }
            })
        {
            let _ = watcher.watch(path.as_path(), RecursiveMode::NonRecursive);
            loop {
                std::thread::sleep(std::time::Duration::from_secs(3600));
            }
        }
    });
    rx
}

/// Coalesces pending change pings and reloads the noise parameters. Returns
/// `None` when nothing changed or the file is missing or malformed; a bad
/// edit keeps the previous parameters running.
pub fn process_noise_file_events(rx: &Receiver<()>, path: &Path) -> Option<NoiseParams> {
    let mut changed = false;
    for _ in rx.try_iter() {
        changed = true;
    }
    if !changed {
        return None;
    }
    if !path.exists() {
        log::warn!("run config missing: {}", path.display());
        return None;
    }
    match veld_noise::load_params_from_path(path) {
        Ok(params) => {
            log::info!("noise config reloaded from {}", path.display());
            Some(params)
        }
        Err(e) => {
            log::warn!("noise config reload failed ({}): {}", path.display(), e);
            None
        }
    }
}
