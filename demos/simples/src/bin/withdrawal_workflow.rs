use brisa_client::prelude::*;
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let session = Arc::new(Session::from_config(&config, Arc::new(LoggingRedirect)));
    if let Ok(token) = env::var("BRISA_API_TOKEN") {
        session.set_token(&token)?;
    }
    let client = Arc::new(HttpClient::new(&config, session.clone())?);
    let service = WithdrawalServiceImpl::new(client);

    let profile = session.profile().unwrap_or_default();
    let permissions = RolePermissions::for_profile(&profile);

    if permissions.can_forward_requests() {
        for request in service.pending_requests().await? {
            info!(
                "Forwarding request {} of {}",
                request.id_solicitud,
                request.estudiante_nombre.as_deref().unwrap_or("-")
            );
            service
                .forward_request(request.id_solicitud, Some("Derivado desde consola"))
                .await?;
        }
    } else if permissions.can_approve_or_reject_requests() {
        for request in service.forwarded_to_me().await? {
            let result = service
                .approve_request(request.id_solicitud, ApproveRequest::default())
                .await?;
            info!("Request {} approved: {}", request.id_solicitud, result);
        }
    } else {
        warn!(
            "Role {:?} has nothing to process in the withdrawal workflow",
            permissions.role()
        );
    }

    Ok(())
}
