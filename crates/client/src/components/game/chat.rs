//! Chat feed.

use dioxus::prelude::*;
use mafia_shared::{ChatMessage, MessageKind};

use crate::stores::SESSION;
use crate::text::escape_html;

#[component]
pub fn ChatFeed() -> Element {
    let state = SESSION.read();
    // Synthesized lines have no server id; fall back to their position.
    let rows: Vec<(String, ChatMessage)> = state
        .messages
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let key = m
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("local-{idx}"));
            (key, m.clone())
        })
        .collect();

    rsx! {
        div { class: "flex-1 overflow-y-auto space-y-2 p-4",
            if rows.is_empty() {
                div { class: "text-center text-gray-500 text-sm italic mt-8",
                    "No messages yet. Say something!"
                }
            }
            for (key, message) in rows.into_iter() {
                MessageRow { key: "{key}", message }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    // System and announcement lines are centered, not attributed.
    if matches!(
        message.message_type,
        MessageKind::System | MessageKind::Announcement | MessageKind::GameAction
    ) {
        return rsx! {
            div { class: "text-center text-xs text-gray-400 italic py-1",
                "{message.content}"
            }
        };
    }

    let time = message.sent_at.format("%H:%M").to_string();
    let row_class = format!(
        "bg-[#2b2d31] rounded-lg px-3 py-2{}",
        row_class_suffix(message.is_flagged, message.suspicion_score)
    );

    rsx! {
        div { class: row_class,
            div { class: "flex items-baseline gap-2",
                span { class: "text-sm font-bold text-indigo-300", "{message.sender_name}" }
                span { class: "text-xs text-gray-500", "{time}" }
                if message.message_type == MessageKind::Voice {
                    span { class: "text-xs text-gray-500", "🎤 voice" }
                }
            }
            if let Some(reason) = message.hidden_reason.as_ref() {
                // Moderation placeholder goes through an HTML sink, so the
                // server-supplied reason has to be escaped by hand.
                div {
                    class: "text-sm text-gray-500",
                    dangerous_inner_html: format!("<em>Message hidden: {}</em>", escape_html(reason)),
                }
            } else {
                // Plain text node: escaped by the framework.
                div { class: "text-sm text-gray-100", "{message.content}" }
                if let Some(transcription) = message.transcription.as_ref() {
                    div { class: "text-xs text-gray-400 italic mt-1",
                        "Transcript: {transcription}"
                    }
                }
                if message.suspicion_score > 0.0 {
                    SuspicionBar { score: message.suspicion_score }
                }
            }
        }
    }
}

/// Extra row styling for messages the server flagged without scoring;
/// a scored message gets the meter instead.
fn row_class_suffix(is_flagged: bool, suspicion_score: f32) -> &'static str {
    if is_flagged && suspicion_score <= 0.0 {
        " message-suspicious"
    } else {
        ""
    }
}

/// Fill percentage for the suspicion meter.
fn suspicion_width_pct(score: f32) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Visualizes the server's moderation score for a message.
#[component]
fn SuspicionBar(score: f32) -> Element {
    let width = suspicion_width_pct(score);

    rsx! {
        div { class: "mt-1.5 flex items-center gap-2",
            div { class: "suspicion-bar flex-1",
                div {
                    class: "suspicion-fill",
                    style: "width: {width}%",
                }
            }
            span { class: "text-[10px] text-gray-500", "suspicion {width}%" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspicion_fill_tracks_the_score() {
        assert_eq!(suspicion_width_pct(0.6), 60);
        assert_eq!(suspicion_width_pct(0.0), 0);
        assert_eq!(suspicion_width_pct(1.0), 100);
    }

    #[test]
    fn suspicion_fill_clamps_out_of_range_scores() {
        assert_eq!(suspicion_width_pct(-0.3), 0);
        assert_eq!(suspicion_width_pct(1.7), 100);
    }

    #[test]
    fn flagged_without_a_score_styles_the_row_not_the_meter() {
        assert_eq!(row_class_suffix(true, 0.0), " message-suspicious");
        // A scored message shows the meter, so the row stays plain.
        assert_eq!(row_class_suffix(true, 0.4), "");
        assert_eq!(row_class_suffix(false, 0.0), "");
    }
}
