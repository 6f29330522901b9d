//! Embedded minijinja view environment.
//!
//! Templates are compiled into the binary with `include_str!`; a template
//! that fails to parse is a programmer error and aborts startup.

use axum::response::Html;
use minijinja::Environment;

use crate::error::AppResult;
use crate::state::AppState;

const TEMPLATES: [(&str, &str); 15] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("events.html", include_str!("../templates/events.html")),
    ("team.html", include_str!("../templates/team.html")),
    ("partners.html", include_str!("../templates/partners.html")),
    ("questions.html", include_str!("../templates/questions.html")),
    ("join.html", include_str!("../templates/join.html")),
    ("track.html", include_str!("../templates/track.html")),
    ("404.html", include_str!("../templates/404.html")),
    ("admin/login.html", include_str!("../templates/admin/login.html")),
    (
        "admin/dashboard.html",
        include_str!("../templates/admin/dashboard.html"),
    ),
    (
        "admin/event_form.html",
        include_str!("../templates/admin/event_form.html"),
    ),
    (
        "admin/team_form.html",
        include_str!("../templates/admin/team_form.html"),
    ),
    (
        "admin/partner_form.html",
        include_str!("../templates/admin/partner_form.html"),
    ),
    (
        "admin/question_form.html",
        include_str!("../templates/admin/question_form.html"),
    ),
];

/// Build the view environment with every bundled template registered.
pub fn build_env() -> Environment<'static> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)
            .unwrap_or_else(|err| panic!("Invalid bundled template {name}: {err}"));
    }
    env
}

/// Render a named template with the given context.
pub fn render(state: &AppState, name: &str, ctx: minijinja::Value) -> AppResult<Html<String>> {
    let template = state.views.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}
