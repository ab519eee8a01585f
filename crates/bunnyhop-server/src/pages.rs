//! Fixed HTML pages

/// Served when no command matches and no default command is configured.
///
/// The empty data-URI icon keeps browsers from following up with a
/// `/favicon.ico` request, which would be resolved as a keyword query.
pub const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><link rel="icon" type="image/png" href="data:image/png;base64,iVBORw0KGgo="></head>
<body>Nothing interesting here.</body>
</html>
"#;

/// Served when a destination URL cannot be built
pub const FAILURE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><link rel="icon" type="image/png" href="data:image/png;base64,iVBORw0KGgo="></head>
<body>Something went wrong while building that link.</body>
</html>
"#;
