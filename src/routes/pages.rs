//! Server-rendered page shells.
//!
//! DESIGN
//! ======
//! Pages are plain HTML strings assembled with `format!`. Dynamic values
//! pass through [`html_escape`] before interpolation; static copy is
//! embedded as written. The login and register renderers are reused by the
//! auth POST handlers to re-show the form with an error message.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::routes::auth::AuthUser;
use crate::state::{AppState, PricingTables};

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; line-height: 1.6; color: #333; background: #f3f4f6; }}
        main {{ max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }}
        h1.hero {{ font-size: 3rem; text-align: center; color: #9333ea; }}
        .cards {{ display: flex; gap: 2rem; }}
        .card {{ flex: 1; background: #fff; border-radius: 0.5rem; padding: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.2); }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
        th {{ background-color: #f4f4f4; font-weight: 600; }}
        nav.sidebar a {{ margin-right: 1rem; }}
        nav.sidebar a.active {{ color: #9333ea; font-weight: 600; }}
        .brand {{ color: #9333ea; font-weight: 700; }}
        .error {{ color: #b91c1c; }}
        form.auth label {{ display: block; margin-top: 0.75rem; }}
        canvas {{ background: #e5e7eb; }}
    </style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#,
        title = html_escape(title),
        body = body,
    )
}

// =============================================================================
// PUBLIC PAGES
// =============================================================================

fn home_page() -> String {
    let body = r#"<section>
  <h1 class="hero">Design Your Perfect Piece</h1>
  <p>Create and sell custom clothing designs. From T-shirts to socks, bring your ideas to life with our intuitive design platform.</p>
  <p><a href="/auth/register">Get Started</a> <a href="/design">Try Designer</a></p>
</section>
<section class="cards">
  <div class="card">
    <h3>Design</h3>
    <p>Create unique designs with our intuitive canvas editor. Add text, images, and choose from various styles.</p>
  </div>
  <div class="card">
    <h3>Sell</h3>
    <p>Open your own shop and start selling your designs to customers worldwide.</p>
  </div>
  <div class="card">
    <h3>Track</h3>
    <p>Manage your orders and track their status from production to delivery.</p>
  </div>
</section>"#;
    page_shell("DesignPiece", body)
}

/// `GET /` — landing page.
pub async fn home() -> Html<String> {
    Html(home_page())
}

fn design_editor_page() -> String {
    let body = r#"<h2>Design Canvas</h2>
<canvas id="design-canvas" width="600" height="600"></canvas>
<p>
  <button type="button" id="add-text">Add Text</button>
  <button type="button" id="add-image">Add Image</button>
  <button type="button" id="toggle-preview">Preview</button>
</p>
<nav id="design-tabs">
  <button type="button">canvas</button>
  <button type="button">product</button>
  <button type="button">fabric</button>
  <button type="button">patches</button>
  <button type="button">style</button>
</nav>
<form id="design-form">
  <label for="design-name">Design Name</label>
  <input type="text" id="design-name" name="name">
  <label for="design-description">Description</label>
  <textarea id="design-description" name="description" rows="3"></textarea>
  <p>
    <button type="button" id="save-design">Save Design</button>
    <button type="button" id="publish-design">Publish</button>
  </p>
</form>"#;
    page_shell("Design Studio | DesignPiece", body)
}

/// `GET /design` — the canvas editor shell. Public, like the landing page.
pub async fn design() -> Html<String> {
    Html(design_editor_page())
}

// =============================================================================
// AUTH PAGES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AuthPageQuery {
    pub from: Option<String>,
}

fn hidden_from_field(from: Option<&str>) -> String {
    match from {
        Some(from) => format!(
            r#"<input type="hidden" name="from" value="{}">"#,
            html_escape(from)
        ),
        None => String::new(),
    }
}

fn error_line(error: Option<&str>) -> String {
    match error {
        Some(error) => format!(r#"<p class="error">{}</p>"#, html_escape(error)),
        None => String::new(),
    }
}

pub(crate) fn login_page(from: Option<&str>, error: Option<&str>) -> String {
    let body = format!(
        r#"<h2>Sign in</h2>
{error}<form class="auth" method="post" action="/auth/login">
  {from}<label for="email">Email</label>
  <input type="email" id="email" name="email" required>
  <label for="password">Password</label>
  <input type="password" id="password" name="password" required>
  <p><button type="submit">Sign in</button></p>
</form>
<p>No account yet? <a href="/auth/register">Create one</a></p>"#,
        error = error_line(error),
        from = hidden_from_field(from),
    );
    page_shell("Sign in | DesignPiece", &body)
}

/// `GET /auth/login` — login form. The guard keeps signed-in visitors out.
pub async fn login_form(Query(query): Query<AuthPageQuery>) -> Html<String> {
    Html(login_page(query.from.as_deref(), None))
}

pub(crate) fn register_page(from: Option<&str>, error: Option<&str>) -> String {
    let body = format!(
        r#"<h2>Create your account</h2>
{error}<form class="auth" method="post" action="/auth/register">
  {from}<label for="name">Name</label>
  <input type="text" id="name" name="name">
  <label for="email">Email</label>
  <input type="email" id="email" name="email" required>
  <label for="password">Password</label>
  <input type="password" id="password" name="password" required>
  <p><button type="submit">Create account</button></p>
</form>
<p>Already registered? <a href="/auth/login">Sign in</a></p>"#,
        error = error_line(error),
        from = hidden_from_field(from),
    );
    page_shell("Register | DesignPiece", &body)
}

/// `GET /auth/register` — registration form.
pub async fn register_form(Query(query): Query<AuthPageQuery>) -> Html<String> {
    Html(register_page(query.from.as_deref(), None))
}

// =============================================================================
// DASHBOARD PAGES
// =============================================================================

const DASHBOARD_NAV: [(&str, &str); 4] = [
    ("Dashboard", "/dashboard"),
    ("My Products", "/dashboard/products"),
    ("My Shop", "/dashboard/shop"),
    ("Settings", "/dashboard/settings"),
];

fn dashboard_shell(active: &str, body: &str) -> String {
    let mut nav = String::new();
    for (name, href) in DASHBOARD_NAV {
        let class = if href == active { r#" class="active""# } else { "" };
        nav.push_str(&format!(r#"<a href="{href}"{class}>{name}</a>"#));
        nav.push('\n');
    }

    let shell_body = format!(
        r#"<h1 class="brand">DesignPiece</h1>
<nav class="sidebar">
{nav}</nav>
<form method="post" action="/api/auth/logout">
  <button type="submit">Sign out</button>
</form>
{body}"#
    );
    page_shell("DesignPiece", &shell_body)
}

/// `GET /dashboard`
pub async fn dashboard(auth: AuthUser) -> Html<String> {
    let body = format!(
        "<h2>Dashboard</h2>\n<p>Welcome back, {}.</p>\n<p><a href=\"/design\">Start a new design</a></p>",
        html_escape(&auth.user.name)
    );
    Html(dashboard_shell("/dashboard", &body))
}

/// `GET /dashboard/products`
pub async fn dashboard_products(_auth: AuthUser) -> Html<String> {
    let body = "<h2>My Products</h2>\n<p>Your saved designs appear here. <a href=\"/design\">Create one</a> to get started.</p>";
    Html(dashboard_shell("/dashboard/products", body))
}

/// `GET /dashboard/shop`
pub async fn dashboard_shop(_auth: AuthUser) -> Html<String> {
    let body = "<h2>My Shop</h2>\n<p>Your published designs are listed for sale here.</p>";
    Html(dashboard_shell("/dashboard/shop", body))
}

/// `GET /dashboard/settings`
pub async fn dashboard_settings(auth: AuthUser) -> Html<String> {
    let body = format!(
        "<h2>Settings</h2>\n<p>Signed in as {}.</p>",
        html_escape(&auth.user.email)
    );
    Html(dashboard_shell("/dashboard/settings", &body))
}

// =============================================================================
// ADMIN PAGE
// =============================================================================

fn access_denied_page() -> String {
    let body = "<h1>Access Denied</h1>\n<p>You don't have permission to access this page.</p>";
    page_shell("Access Denied | DesignPiece", body)
}

fn admin_tables(pricing: &PricingTables) -> String {
    let mut body = String::from("<h2>Product Pricing</h2>\n<table>\n<tr><th>Product</th><th>Base Price</th><th>Bulk Discount</th></tr>\n");
    for row in &pricing.products {
        body.push_str(&format!(
            "<tr><td>{}</td><td>${}</td><td>{}%</td></tr>\n",
            html_escape(&row.name),
            row.base_price,
            row.bulk_discount * 100.0,
        ));
    }
    body.push_str("</table>\n<h2>Patch Types</h2>\n<table>\n<tr><th>Type</th><th>Price</th></tr>\n");
    for row in &pricing.patches {
        body.push_str(&format!(
            "<tr><td>{}</td><td>${}</td></tr>\n",
            html_escape(&row.name),
            row.price,
        ));
    }
    body.push_str("</table>\n<h2>Fabric Types</h2>\n<table>\n<tr><th>Type</th><th>Description</th></tr>\n");
    for row in &pricing.fabrics {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            html_escape(&row.name),
            html_escape(&row.description),
        ));
    }
    body.push_str("</table>");
    page_shell("Admin | DesignPiece", &body)
}

/// `GET /admin` — the pricing console. The guard already bounces
/// non-admins to the dashboard; the in-page denial covers any other path
/// to this handler.
pub async fn admin(State(state): State<AppState>, auth: AuthUser) -> Html<String> {
    if !auth.user.is_admin() {
        return Html(access_denied_page());
    }
    let pricing = state.pricing.read().await;
    Html(admin_tables(&pricing))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
