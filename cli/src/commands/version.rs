//! Version command

use crate::app::AppContext;
use crate::output::Renderer;

/// Run the version command.
pub fn run(ctx: &AppContext) {
    let version = env!("CARGO_PKG_VERSION");
    match ctx.renderer() {
        Renderer::Human(r) => r.render_version(version),
        Renderer::Json(r) => r.render_version(version),
    }
}
