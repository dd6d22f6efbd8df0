use anyhow::Result;
use tracing::{debug, info, trace};

use super::initdb::run_migrations;
use super::serve::serve_with_state;
use crate::config::Settings;
use crate::schemas::AppState;

pub async fn migrate_and_serve(settings: &Settings) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");
    debug!("Database URL: {}", settings.database_url);

    // Reuse the migrated connection as the server's pool
    let db = run_migrations(&settings.database_url).await?;
    let state = AppState {
        db,
        password_hashing: settings.security,
    };

    serve_with_state(state, settings).await
}
