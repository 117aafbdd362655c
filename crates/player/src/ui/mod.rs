use crate::ports::outbound::CharacterSink;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    /// Parse a shell name (`desktop` / `mobile`, any case).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    /// Narrow viewports get the mobile layout.
    pub fn from_viewport_width(width: f64) -> Self {
        if width < 768.0 {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Type alias for the save port used throughout the UI
pub type Sink = Arc<dyn CharacterSink>;

/// Hook to access the character sink from Dioxus context
pub fn use_character_sink() -> Sink {
    use_context::<Sink>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Router::<routes::Route> {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        Router::<routes::Route> {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow-y: auto;",
            div {
                style: "max-width: 720px; margin: 0 auto;",
                {children}
            }
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow-y: auto;",
            {children}
        }
    }
}
