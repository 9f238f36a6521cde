use crate::application::client::HttpClient;
use crate::application::interfaces::notification::NotificationService;
use crate::constants::INCIDENTS_PREFIX;
use crate::error::AppError;
use crate::model::http::{QueryParams, build_query};
use crate::presentation::notification::{MarkAllReadResponse, Notification, NotificationCreate};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the notification service
pub struct NotificationServiceImpl {
    client: Arc<HttpClient>,
}

impl NotificationServiceImpl {
    /// Creates a new instance of the notification service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn create_notification(
        &self,
        data: &NotificationCreate,
    ) -> Result<Notification, AppError> {
        info!("Notifying user {}: {}", data.id_usuario, data.titulo);
        self.client
            .post(&format!("{INCIDENTS_PREFIX}/notificaciones"), data)
            .await
    }

    async fn get_notification(&self, id_notificacion: i64) -> Result<Notification, AppError> {
        self.client
            .get(&format!("{INCIDENTS_PREFIX}/notificaciones/{id_notificacion}"))
            .await
    }

    async fn list_user_notifications(
        &self,
        id_usuario: i64,
        only_unread: bool,
        limit: Option<u32>,
    ) -> Result<Vec<Notification>, AppError> {
        let query = QueryParams::new()
            .push("solo_no_leidas", Some(only_unread))
            .push("limit", limit);
        let path = format!(
            "{INCIDENTS_PREFIX}/notificaciones/{id_usuario}{}",
            build_query(&query)
        );
        let notifications: Vec<Notification> = self.client.get(&path).await?;
        debug!(
            "User {} has {} notifications",
            id_usuario,
            notifications.len()
        );
        Ok(notifications)
    }

    async fn mark_notification_read(
        &self,
        id_notificacion: i64,
        id_usuario: i64,
    ) -> Result<Notification, AppError> {
        let query = QueryParams::new().push("id_usuario", Some(id_usuario));
        let path = format!(
            "{INCIDENTS_PREFIX}/notificaciones/{id_notificacion}/leer{}",
            build_query(&query)
        );
        self.client.patch_empty(&path).await
    }

    async fn mark_all_read(&self, id_usuario: i64) -> Result<u64, AppError> {
        let response: MarkAllReadResponse = self
            .client
            .patch_empty(&format!(
                "{INCIDENTS_PREFIX}/notificaciones/{id_usuario}/leer-todas"
            ))
            .await?;
        info!(
            "Marked {} notifications of user {} as read",
            response.cantidad, id_usuario
        );
        Ok(response.cantidad)
    }
}
