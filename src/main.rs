use anyhow::Context;
use dioxus::{
    logger::tracing::{warn, Level},
    prelude::*,
};
use menukit::{App, MenuSettings};

/// Reads settings overrides from the JSON file named by `MENUKIT_SETTINGS`.
#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> anyhow::Result<MenuSettings> {
    let Ok(path) = std::env::var("MENUKIT_SETTINGS") else {
        return Ok(MenuSettings::default());
    };
    let json = std::fs::read_to_string(&path).with_context(|| format!("could not read {path}"))?;
    MenuSettings::from_json(&json)
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> anyhow::Result<MenuSettings> {
    Ok(MenuSettings::default())
}

fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::INFO).context("could not initialise logging")?;
    let settings = load_settings().unwrap_or_else(|e| {
        warn!("Using default menu settings: {e:?}");
        MenuSettings::default()
    });

    LaunchBuilder::new().with_context(settings).launch(App);
    Ok(())
}
