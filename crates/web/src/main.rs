//! InternHub web - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use internhub_client::infrastructure::http_client::ApiAdapter;
use internhub_client::ports::outbound::{NotifierPort, SubmissionApiPort};
use internhub_client::{ClientConfig, SubmitInternship};
use internhub_domain::internship_form;
use internhub_web::Services;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Env files first: RUST_LOG may come from them.
        let env_files = load_env_files(&workspace_root());

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    "internhub_web=debug,internhub_client=debug,dioxus=info".into()
                }),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        for (path, result) in env_files {
            match result {
                Ok(()) => tracing::debug!(path = %path.display(), "Loaded env file"),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable env file"),
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting InternHub");

    // HTTP
    #[cfg(not(target_arch = "wasm32"))]
    let config = ClientConfig::from_env();
    #[cfg(target_arch = "wasm32")]
    let config = ClientConfig::same_origin();

    tracing::info!(
        server_url = %config.server_url,
        timeout_secs = config.timeout.as_secs(),
        "Submission client configured"
    );
    let api: Arc<dyn SubmissionApiPort> = Arc::new(ApiAdapter::new(config));

    // Platform
    #[cfg(not(target_arch = "wasm32"))]
    let notifier: Arc<dyn NotifierPort> = Arc::new(internhub_web::platform::WebviewNotifier);
    #[cfg(target_arch = "wasm32")]
    let notifier: Arc<dyn NotifierPort> =
        Arc::new(internhub_client::infrastructure::platform::BrowserNotifier);

    let schema = internship_form().context("building the internship form schema")?;
    let services = Services::new(SubmitInternship::new(api, notifier), schema);

    launch(services)
}

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn launch(services: Services) -> anyhow::Result<()> {
    dioxus::LaunchBuilder::new()
        .with_context(services)
        .launch(internhub_web::app);
    Ok(())
}

#[cfg(not(any(feature = "desktop", target_arch = "wasm32")))]
fn launch(_services: Services) -> anyhow::Result<()> {
    anyhow::bail!("built without a renderer; rebuild with `--features desktop`")
}

#[cfg(not(target_arch = "wasm32"))]
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// Load `.env.local` then `.env` from `dir`, skipping files that do not exist.
///
/// Variables already set are never overridden, so `.env.local` wins over
/// `.env`. Returns each file that was attempted with its result; tracing is
/// not up yet when this runs.
#[cfg(not(target_arch = "wasm32"))]
fn load_env_files(dir: &Path) -> Vec<(PathBuf, Result<(), dotenvy::Error>)> {
    [".env.local", ".env"]
        .into_iter()
        .map(|filename| dir.join(filename))
        .filter(|path| path.exists())
        .map(|path| {
            let result = dotenvy::from_path(&path);
            (path, result)
        })
        .collect()
}
