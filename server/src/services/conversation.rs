//! Conversation services - Two-party conversations and the messages inside them

use crate::core::{AppError, AppState};
use crate::dtos::{
    ConversationDTO, CreateMessageDTO, MessagesQuery, SendMessageDTO, StartConversationDTO,
};
use crate::entities::{InvariantError, Message, ParticipantPair, User};
use crate::repositories::{Create, Read};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

const MESSAGES_PAGE_SIZE: i64 = 50;

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<ConversationDTO>>, AppError> {
    let conversations = state
        .conversation
        .find_many_by_user_id(&current_user.user_id)
        .await?;
    debug!("User takes part in {} conversations", conversations.len());
    Ok(Json(
        conversations.into_iter().map(ConversationDTO::from).collect(),
    ))
}

/// Returns the existing conversation with `participant_id` (200) or a new one (201)
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, other = %body.participant_id))]
pub async fn start_conversation(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<StartConversationDTO>,
) -> Result<(StatusCode, Json<ConversationDTO>), AppError> {
    let participants = ParticipantPair::new(current_user.user_id, body.participant_id)?;

    if state.user.read(&body.participant_id).await?.is_none() {
        return Err(AppError::not_found("User not found"));
    }

    let (conversation, created) = state.conversation.find_or_create(&participants).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ConversationDTO::from(conversation))))
}

#[instrument(skip(state, current_user, params), fields(user_id = %current_user.user_id))]
pub async fn get_conversation_messages(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(conversation_id): Path<i64>,
    Query(params): Query<MessagesQuery>,
) -> Result<Json<Vec<Message>>, AppError> {
    let conversation = state
        .conversation
        .read(&conversation_id)
        .await?
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    if !conversation.participants.contains(current_user.user_id) {
        warn!("User is not a participant of conversation {}", conversation_id);
        return Err(AppError::forbidden("You are not a participant of this conversation"));
    }

    let messages = state
        .msg
        .find_many_paginated(
            &conversation_id,
            params.before_date.as_ref(),
            MESSAGES_PAGE_SIZE,
        )
        .await?;
    Ok(Json(messages))
}

/// Sends a direct message, opening the conversation between the two users on first contact.
/// The message and the conversation's `last_message_id` are written in one transaction.
#[instrument(skip(state, current_user, body), fields(sender_id = %current_user.user_id, recipient_id = %body.recipient_id))]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<SendMessageDTO>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    body.validate()?;
    if body.recipient_id == current_user.user_id {
        return Err(InvariantError::SelfMessage.into());
    }

    if state.user.read(&body.recipient_id).await?.is_none() {
        return Err(AppError::not_found("Recipient not found"));
    }

    let participants = ParticipantPair::new(current_user.user_id, body.recipient_id)?;
    let (conversation, _) = state.conversation.find_or_create(&participants).await?;

    let message = state
        .msg
        .create(&CreateMessageDTO {
            conversation_id: conversation.conversation_id,
            sender_id: current_user.user_id,
            recipient_id: body.recipient_id,
            content: body.content,
            priority: body.priority,
        })
        .await?;

    info!(
        "Message {} sent in conversation {}",
        message.message_id, conversation.conversation_id
    );
    Ok((StatusCode::CREATED, Json(message)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_unread_messages(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state
        .msg
        .find_unread_for_recipient(&current_user.user_id)
        .await?;
    Ok(Json(messages))
}

/// Only the recipient can mark a message as read
#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn mark_message_read(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(message_id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    let message = state
        .msg
        .read(&message_id)
        .await?
        .ok_or_else(|| AppError::not_found("Message not found"))?;

    if message.recipient_id != current_user.user_id {
        return Err(AppError::forbidden("Only the recipient can mark a message as read"));
    }
    if message.read {
        return Ok(Json(message));
    }

    let updated = state.msg.mark_read(&message_id).await?;
    Ok(Json(updated))
}
