//! API documentation page

use axum::response::Html;

use super::OPENAPI_PATH;

/// Renders the Stoplight Elements viewer for the OpenAPI document
pub async fn handler() -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <title>Form Mailer API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
    <main role="main">
        <elements-api apiDescriptionUrl="{OPENAPI_PATH}" router="hash" layout="sidebar" />
    </main>
</body>
</html>
"#
    ))
}
