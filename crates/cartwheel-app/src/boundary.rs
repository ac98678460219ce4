//! Render boundary.
//!
//! A failed page render must not take the whole session down: the boundary
//! catches the failure and substitutes a generic recovery fragment with a
//! full-reload action. No partial recovery is attempted; cart state is not
//! persisted, so a reload starts the session over.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

/// Recovery fragment shown in place of a failed subtree.
pub fn render_fallback() -> String {
    r#"<section class="render-error" data-section="error">
    <h2>Something went wrong</h2>
    <p>An unexpected error occurred while displaying this page.</p>
    <a href="/" class="btn" data-intent="reload">Reload</a>
</section>"#
        .to_string()
}

/// Run `render`, substituting the recovery fragment if it panics.
pub fn render_boundary<F>(render: F) -> String
where
    F: FnOnce() -> String,
{
    match catch_unwind(AssertUnwindSafe(render)) {
        Ok(html) => html,
        Err(_) => {
            error!("page render failed; showing recovery fragment");
            render_fallback()
        }
    }
}
