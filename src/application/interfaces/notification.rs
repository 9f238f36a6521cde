use crate::error::AppError;
use crate::presentation::notification::{Notification, NotificationCreate};
use async_trait::async_trait;

/// Interface for the notification service
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Creates a notification
    async fn create_notification(
        &self,
        data: &NotificationCreate,
    ) -> Result<Notification, AppError>;

    /// Gets one notification
    async fn get_notification(&self, id_notificacion: i64) -> Result<Notification, AppError>;

    /// Notifications of a user, newest first
    async fn list_user_notifications(
        &self,
        id_usuario: i64,
        only_unread: bool,
        limit: Option<u32>,
    ) -> Result<Vec<Notification>, AppError>;

    /// Marks a notification as read
    async fn mark_notification_read(
        &self,
        id_notificacion: i64,
        id_usuario: i64,
    ) -> Result<Notification, AppError>;

    /// Marks every notification of a user as read and returns how many changed
    async fn mark_all_read(&self, id_usuario: i64) -> Result<u64, AppError>;
}
