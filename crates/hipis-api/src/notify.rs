use uuid::Uuid;

use hipis_core::doc_keys;
use hipis_core::models::notification::Notification;
use hipis_storage::docs;

use crate::state::AppState;

/// Write a notification document for a user. Best-effort: a failed write is
/// logged and never fails the operation that triggered it.
pub async fn notify(
    state: &AppState,
    user_id: Uuid,
    title: &str,
    message: &str,
    kind: &str,
    link: &str,
) {
    let notification = Notification {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_string(),
        message: message.to_string(),
        kind: kind.to_string(),
        link: link.to_string(),
        read: false,
        created_at: jiff::Timestamp::now(),
    };

    let key = doc_keys::notification(notification.id);
    if let Err(err) = docs::save(&state.s3, &state.bucket, &key, &notification).await {
        tracing::warn!(error = %err, user_id = %user_id, "failed to write notification");
    }
}
