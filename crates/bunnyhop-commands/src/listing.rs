use crate::error::{CommandError, Result};
use crate::table::CommandTable;
use handlebars::Handlebars;
use serde::Serialize;

const COMMAND_LIST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<link rel="icon" type="image/png" href="data:image/png;base64,iVBORw0KGgo=" />
<title>bunnyhop commands</title>
<style>
body{font-family:system-ui,-apple-system,Segoe UI,Helvetica,Arial,sans-serif;margin:24px;line-height:1.5;}
table{border-collapse:collapse;width:100%;}
th,td{border:1px solid #ddd;padding:6px 8px;font-size:14px;text-align:left;vertical-align:top;}
th{background:#f5f5f5;}
code{background:#f6f8fa;padding:2px 4px;border-radius:4px;}
.muted{color:#666;}
</style>
</head>
<body>
<h1>bunnyhop</h1>
<p class="muted">{{count}} commands &middot; v{{version}}</p>
<table>
<thead><tr><th>Command</th><th>Type</th><th>Description</th><th>URL</th></tr></thead>
<tbody>
{{#each commands}}
<tr>
<td>{{#if is_default}}<em>(default)</em>{{else}}<code>{{key}}</code>{{/if}}</td>
<td>{{kind}}</td>
<td>{{docstring}}</td>
<td class="muted">{{base_url}}</td>
</tr>
{{/each}}
</tbody>
</table>
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    key: &'a str,
    kind: &'static str,
    docstring: &'a str,
    base_url: &'a str,
    is_default: bool,
}

#[derive(Debug, Serialize)]
struct ListPage<'a> {
    version: &'static str,
    count: usize,
    commands: Vec<ListEntry<'a>>,
}

/// Render the HTML page listing every command in key order
pub fn render_command_list(table: &CommandTable) -> Result<String> {
    let page = ListPage {
        version: env!("CARGO_PKG_VERSION"),
        count: table.len(),
        commands: table
            .iter()
            .map(|cmd| ListEntry {
                key: &cmd.key,
                kind: cmd.kind.identifier(),
                docstring: cmd.docstring.as_deref().unwrap_or(""),
                base_url: &cmd.base_url,
                is_default: cmd.is_default(),
            })
            .collect(),
    };

    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .render_template(COMMAND_LIST_TEMPLATE, &page)
        .map_err(|e| CommandError::TemplateError(e.to_string()))
}
