/// Canned-response chat assistant for the landing page.
///
/// The assistant does not talk to any model. User text is routed through an
/// ordered keyword rule table (`resolver`), and the reply is delivered after a
/// short artificial delay so the widget can show a typing indicator.
///
/// # Usage
///
/// ```rust
/// use wukirtech::assistant::{ChatSession, resolve};
///
/// let mut session = ChatSession::new();
/// if let Some(pending) = session.submit("ada wisata apa?") {
///     session.receive(resolve(&pending.input, &[]));
/// }
/// assert_eq!(session.messages().len(), 3);
/// ```
mod resolver;
mod session;

pub use resolver::{
    FALLBACK_TEXT, HISTORY_TEXT, Intent, LOCATION_TEXT, RECOMMENDATION_LIMIT, RULES, Reply, Rule,
    UMKM_TEXT, WEATHER_TEXT, classify, resolve, resolve_with,
};
pub use session::{ChatSession, PanelState, PendingReply, WELCOME_ID, WELCOME_TEXT};

use crate::types::Destination;
use std::time::Duration;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Single-shot reply: waits `delay`, then resolves `input` against the
/// destinations that were loaded when the question was sent. Cannot be
/// cancelled; concurrent calls are independent of each other.
pub async fn respond(input: String, destinations: Vec<Destination>, delay: Duration) -> Reply {
    crate::clock::sleep(delay).await;
    let reply = resolve(&input, &destinations);
    tracing::debug!(intent = ?reply.intent, show_map = reply.show_map, "assistant reply ready");
    reply
}
