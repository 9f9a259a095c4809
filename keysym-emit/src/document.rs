//! Document rendering
//!
//! Assembles the generated header as text. Rendering is pure: the same table,
//! naming, guard and layout always give byte-identical output, which keeps the
//! generated file stable under version control.
//!
//! Shape of the output, in order:
//!
//!     banner (optional)
//!     #ifndef / #define guard
//!     project includes, then <array>
//!     namespace owl::inline v0 { namespace x11 {
//!     struct <pair> { <keysym_t> keysym; <code_point_t> code_point; };
//!     static constexpr std::array<<pair>, N> <table> = {{ entries }};
//!     } }
//!     #endif // guard

use crate::guard::HeaderGuard;
use crate::naming::TableNaming;
use keysym_parser::ParsedTable;
use std::fmt;

const INDENT: &str = "   ";

/// Everything about the document that isn't the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub banner: Option<String>,
    /// Project headers providing the key-code and code-point types.
    pub includes: Vec<String>,
    /// Versioned outer namespace, e.g. `owl::inline v0`.
    pub namespace: String,
    /// Platform namespace nested inside it, e.g. `x11`.
    pub platform_namespace: String,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            banner: None,
            includes: vec!["libowl/types.hpp".to_string()],
            namespace: "owl::inline v0".to_string(),
            platform_namespace: "x11".to_string(),
        }
    }
}

/// Rendered header text, before any formatter has touched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    text: String,
    entries: usize,
}

impl GeneratedDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of entries in the emitted array.
    pub fn entries(&self) -> usize {
        self.entries
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn render(
    table: &ParsedTable,
    naming: &TableNaming,
    guard: &HeaderGuard,
    layout: &DocumentLayout,
) -> GeneratedDocument {
    let mut out = String::new();

    if let Some(banner) = &layout.banner {
        push_banner(&mut out, banner);
    }

    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));

    if !layout.includes.is_empty() {
        for include in &layout.includes {
            out.push_str(&format!("#include <{include}>\n"));
        }
        out.push('\n');
    }
    out.push_str("#include <array>\n\n");

    let namespaces: Vec<&str> = [layout.namespace.as_str(), layout.platform_namespace.as_str()]
        .into_iter()
        .filter(|ns| !ns.is_empty())
        .collect();

    for (depth, ns) in namespaces.iter().enumerate() {
        let pad = INDENT.repeat(depth);
        out.push_str(&format!("{pad}namespace {ns}\n{pad}{{\n"));
    }

    let pad = INDENT.repeat(namespaces.len());
    push_struct(&mut out, naming, &pad);
    out.push('\n');
    push_table(&mut out, table, naming, &pad);

    for (depth, ns) in namespaces.iter().enumerate().rev() {
        let pad = INDENT.repeat(depth);
        out.push_str(&format!("{pad}}} // namespace {ns}\n"));
    }

    out.push_str(&format!("\n#endif // {guard}\n"));

    GeneratedDocument {
        text: out,
        entries: table.len(),
    }
}

fn push_banner(out: &mut String, banner: &str) {
    out.push_str("/**\n");
    for line in banner.lines() {
        if line.trim().is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(&format!(" * {}\n", line.trim_end()));
        }
    }
    out.push_str(" */\n\n");
}

fn push_struct(out: &mut String, naming: &TableNaming, pad: &str) {
    out.push_str(&format!("{pad}struct {}\n{pad}{{\n", naming.struct_name));
    for (ty, field) in naming.struct_fields() {
        out.push_str(&format!("{pad}{INDENT}{ty} {field};\n"));
    }
    out.push_str(&format!("{pad}}};\n"));
}

fn push_table(out: &mut String, table: &ParsedTable, naming: &TableNaming, pad: &str) {
    out.push_str(&format!(
        "{pad}static constexpr std::array<{}, {}> {} = ",
        naming.struct_name,
        table.len(),
        naming.table_name
    ));

    if table.is_empty() {
        out.push_str("{{}};\n");
        return;
    }

    let entries: Vec<String> = table
        .iter()
        .map(|pair| format!("{pad}{INDENT}{}", naming.entry(pair)))
        .collect();
    out.push_str("{{\n");
    out.push_str(&entries.join(",\n"));
    out.push_str(&format!("\n{pad}}}}};\n"));
}
