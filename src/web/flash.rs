//! One-shot notices carried in the session until the next rendered page.

use tower_sessions::Session;

use super::WebError;

const FLASH_KEY: &str = "_flashes";

/// Queue a message for the next page rendered for this session.
pub async fn push(session: &Session, message: impl Into<String>) -> Result<(), WebError> {
    let mut messages: Vec<String> = session.get(FLASH_KEY).await?.unwrap_or_default();
    messages.push(message.into());
    session.insert(FLASH_KEY, messages).await?;
    Ok(())
}

/// Remove and return all queued messages, oldest first.
pub async fn take(session: &Session) -> Result<Vec<String>, WebError> {
    Ok(session
        .remove::<Vec<String>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}

/// Queued messages followed by one raised while handling the current request.
pub async fn take_with(session: &Session, message: impl Into<String>) -> Result<Vec<String>, WebError> {
    let mut messages = take(session).await?;
    messages.push(message.into());
    Ok(messages)
}
