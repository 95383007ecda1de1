mod doc;
mod dto;
mod error;
mod routes;

use std::{error::Error, net::SocketAddr};

use axum_server::tls_rustls::RustlsConfig;
use booking::{infrastructure::InMemoryBookingRepository, BookingConfig};
use tracing::{error, info, Level};

use crate::routes::{router, AppState};

#[tokio::main]
async fn main() {
    match BookingConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = serve(&config).await {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("設定の読み込みに失敗しました: {}", error)
        }
    }
}

async fn serve(config: &BookingConfig) -> Result<(), Box<dyn Error>> {
    let app = router(AppState::new(InMemoryBookingRepository::new()));
    let addr = config.server.address().parse::<SocketAddr>()?;
    match &config.server.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            info!("https://{} で待ち受けます", addr);
            axum_server::bind_rustls(addr, rustls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!("http://{} で待ち受けます", addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
        }
    }
    Ok(())
}
