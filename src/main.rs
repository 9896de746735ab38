use std::sync::Arc;

use anyhow::Result;
use log::info;
use viewhost::actor::Actor;
use viewhost::config::Config;
use viewhost::icons::IconService;
use viewhost::logger::Logger;
use viewhost::{Service, ViewFactory, ViewService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;

    let factory = Arc::new(ViewFactory::with_builtin_views()?);
    let mut views: ViewService<Actor> = ViewService::new(factory);
    views.set_default_drawer_direction(config.drawers.default_direction);

    views.initialize().await?;
    views.start().await?;

    let default_page = views.get_page(&config.ui.default_page)?;
    info!("Default page: {}", default_page.name);

    let icons = IconService::new(config.ui.icon_theme);
    for page in views.pages() {
        println!("{} {}", icons.page_icon(&page.icon), page.name);
    }

    views.shutdown().await?;
    Ok(())
}
