//! Toast notifications

use std::time::Duration;
use tracing::debug;
use crate::config::InteractionConfig;
use crate::page::{Document, ElementId, TimerQueue, TimerTask};
use crate::utils::errors::Result;

/// Append a toast to the body and schedule its show/hide cycle
pub fn show_toast(
    doc: &mut Document,
    timers: &mut TimerQueue,
    config: &InteractionConfig,
    message: &str,
) -> Result<ElementId> {
    let toast = doc.create_element("div");
    doc.set_attribute(toast, "class", "toast")?;
    doc.set_text(toast, message)?;
    let body = doc.body();
    doc.append_child(body, toast)?;

    timers.schedule(Duration::from_millis(config.toast_show_delay_ms), TimerTask::ShowToast(toast));
    timers.schedule(Duration::from_millis(config.toast_visible_ms), TimerTask::HideToast(toast));
    debug!(message = message, "Toast queued");

    Ok(toast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_is_appended_hidden() {
        let mut doc = Document::new();
        let mut timers = TimerQueue::new();
        let toast = show_toast(&mut doc, &mut timers, &InteractionConfig::default(), "Copied!").unwrap();

        assert_eq!(doc.text_content(toast), "Copied!");
        assert!(!doc.has_class(toast, "show"));
        assert_eq!(timers.pending(), 2);
        assert_eq!(timers.next_due_in(), Some(Duration::from_millis(100)));
    }
}
