//! Raise a notice and schedule its dismissal.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Show `text` in the banner and hide it after
/// [`NOTICE_DURATION_MS`](crate::state::notice::NOTICE_DURATION_MS), unless
/// a newer message has replaced it by then.
pub fn show_message(notices: RwSignal<NoticeState>, text: impl Into<String>, kind: NoticeKind) {
    let text = text.into();
    log::debug!("notice ({}): {text}", kind.as_str());
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let seq = notices.try_update(|n| n.show(text, kind));

    #[cfg(feature = "csr")]
    {
        use crate::state::notice::NOTICE_DURATION_MS;

        if let Some(seq) = seq {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_DURATION_MS))).await;
                notices.try_update(|n| n.dismiss(seq));
            });
        }
    }
}
