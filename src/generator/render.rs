//! RouterOS script rendering.
//!
//! The script replaces the device-side list wholesale: it removes every
//! existing entry tagged with the list name, defines a temporary global
//! add function whose per-entry errors are swallowed, invokes it once per
//! entry, and clears the function again. An empty entry sequence still
//! renders a valid "empty list" script.

use std::sync::LazyLock;

use handlebars::Handlebars;
use serde::Serialize;

use super::aggregate::ResolvedEntry;

const TEMPLATE_NAME: &str = "addrlist";

const SCRIPT_TEMPLATE: &str = r##"/ip/firewall/address-list/remove [ find where list="{{list_name}}" ];
:global {{list_name}}AddIP;
:set {{list_name}}AddIP do={
:do { /ip/firewall/address-list/add list={{list_name}} address=$1 comment="$2" timeout=$3; } on-error={ }
}
{{#each entries}}:${{../list_name}}AddIP "{{address}}" "{{comment}}" "{{timeout}}"
{{/each}}:set {{list_name}}AddIP;
"##;

/// Template registry, compiled once per process and never mutated after.
static REGISTRY: LazyLock<Handlebars<'static>> = LazyLock::new(|| {
    let mut registry = Handlebars::new();
    // The output is RouterOS script text, not HTML.
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(TEMPLATE_NAME, SCRIPT_TEMPLATE)
        .expect("script template is valid");
    registry
});

#[derive(Serialize)]
struct ScriptData<'a> {
    list_name: &'a str,
    entries: &'a [ResolvedEntry],
}

/// Renders one list's entries into the final script text.
///
/// Output is byte-for-byte reproducible for identical inputs.
///
/// # Errors
///
/// Returns the engine's error string. The template is fixed and compiled
/// at first use, so a render failure is an internal invariant violation,
/// not an expected path.
pub fn render_script(list_name: &str, entries: &[ResolvedEntry]) -> Result<String, String> {
    REGISTRY
        .render(TEMPLATE_NAME, &ScriptData { list_name, entries })
        .map_err(|e| e.to_string())
}
