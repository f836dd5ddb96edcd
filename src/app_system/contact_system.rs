use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{error, info, instrument};

use super::{Backend, Settings};
use crate::book_actor::BookService;
use crate::clients::BookClient;
use crate::gateway::{Gateway, GatewayError, HttpGateway, MemoryGateway};

const CHANNEL_BUFFER: usize = 32;

/// Starts the gateway and the book service, and hands out the book client.
pub struct ContactSystem {
    pub book_client: BookClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ContactSystem {
    /// Wire up the configured backend. The book loads the collection as
    /// soon as its service starts.
    #[instrument(name = "contact_system", skip(settings), fields(backend = ?settings.gateway.backend))]
    pub fn new(settings: &Settings) -> Result<Self, GatewayError> {
        info!("Starting contact system");
        let mut handles = Vec::new();

        let gateway: Arc<dyn Gateway> = match settings.gateway.backend {
            Backend::Http => {
                info!(base_url = %settings.gateway.base_url, "Using HTTP gateway");
                Arc::new(HttpGateway::new(
                    settings.gateway.base_url.clone(),
                    settings.gateway.timeout(),
                )?)
            }
            Backend::Memory => {
                let (memory, client) = MemoryGateway::new(CHANNEL_BUFFER);
                handles.push(tokio::spawn(memory.run()));
                Arc::new(client)
            }
        };

        let mut system = Self::with_gateway(gateway, settings.view.page_size);
        // Gateway last: it stops once the book drops its client.
        system.handles.extend(handles);
        Ok(system)
    }

    pub fn with_gateway(gateway: Arc<dyn Gateway>, page_size: NonZeroUsize) -> Self {
        let (service, book_client) = BookService::new(CHANNEL_BUFFER, page_size, gateway);
        let handle = tokio::spawn(service.run());
        Self {
            book_client,
            handles: vec![handle],
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down contact system");

        let _ = self.book_client.shutdown().await;
        drop(self.book_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(format!("Service task failed: {:?}", e));
            }
        }

        info!("Contact system shutdown complete");
        Ok(())
    }
}
