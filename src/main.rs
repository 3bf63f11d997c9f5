use argh::FromArgs;
use relm4::RelmApp;

use crate::app::{App, Launch, Section};

mod app;
mod content;
mod motion;
mod reveal;
mod ui;

/// Personal portfolio, rendered as a native app.
#[derive(FromArgs)]
struct Args {
    /// section to show on launch: home, journey, skills or projects
    #[argh(option, short = 's')]
    section: Option<Section>,

    /// initial window width in pixels
    #[argh(option, default = "1100")]
    width: i32,

    /// initial window height in pixels
    #[argh(option, default = "780")]
    height: i32,
}

fn main() {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    tracing::info!("starting portfolio shell");

    let app = RelmApp::new("io.github.mayacalder.Folio").with_args(Vec::new());
    relm4::set_global_css(app::APP_CSS);
    app.run::<App>(Launch {
        section: args.section,
        width: args.width,
        height: args.height,
    });
}
