//! Dicebound Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dicebound_player::config::PlayerConfig;
use dicebound_player::infrastructure::LoggingCharacterSink;
use dicebound_player::ports::outbound::CharacterSink;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let dotenv_path = dicebound_player::config::load_dotenv();

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    let config = PlayerConfig::from_env();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Dicebound Player");

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);
            dicebound_player::ShellKind::from_viewport_width(width)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            config.shell
        }
    };
    tracing::debug!(?shell, "Selected shell layout");

    // Save port; drafts are only logged for now
    let sink: std::sync::Arc<dyn CharacterSink> = std::sync::Arc::new(LoggingCharacterSink::new());

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(sink)
        .with_context(shell)
        .launch(dicebound_player::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/main.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
