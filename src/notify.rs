use log::warn;
use notify_rust::Notification;
use std::io::{self, Write};
use std::time::Duration;

const BANNER_TIMEOUT: Duration = Duration::from_secs(7);

pub trait Notifier {
    fn deliver(&mut self, title: &str, body: &str);
}

/// Raises a desktop notification, falling back to a console banner when no
/// notification service is reachable. A terminal bell rings either way.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn deliver(&mut self, title: &str, body: &str) {
        let shown = Notification::new()
            .summary(title)
            .body(body)
            .timeout(BANNER_TIMEOUT)
            .show();

        if let Err(err) = shown {
            warn!("desktop notification failed: {err}");
            println!("{title}: {body}");
        }

        ring_bell();
    }
}

// Best-effort audible tone; failures never surface.
fn ring_bell() {
    let mut out = io::stdout();
    let _ = out.write_all(b"\x07").and_then(|()| out.flush());
}
