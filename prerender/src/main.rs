use anyhow::Context;
use d56_prerender::config::Config;
use d56_prerender::export;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()
        .context("invalid prerender configuration")?
        .with_out_dir_override(std::env::args().nth(1))
        .context("invalid output directory argument")?;

    info!(
        out_dir = %config.out_dir.display(),
        site_origin = config.site_origin.as_deref().unwrap_or("-"),
        "exporting landing pages"
    );

    let manifest = export::export_site(&config)
        .await
        .with_context(|| format!("failed to export site to {}", config.out_dir.display()))?;

    for page in &manifest.pages {
        info!(route = page.route, file = %page.file, "exported {}", page.title);
    }
    Ok(())
}
