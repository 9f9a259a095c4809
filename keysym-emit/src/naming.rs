//! Identifiers used in the generated header
//!
//! The generator has been shipped in two variants that disagree on the struct
//! and table names and on how the code-point type is qualified. Neither is
//! treated as canonical: both are presets, and every identifier can be
//! overridden on top of the chosen one.

use keysym_parser::ExtractedPair;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPreset {
    /// `keysym_ucs_pair` / `keysym_to_UCS_table`, `detail::code_point_t`
    Ucs,
    /// `keysym_codepoint_pair` / `keysym_to_code_point_table`, `code_point_t`
    CodePoint,
}

impl NamingPreset {
    pub fn naming(self) -> TableNaming {
        match self {
            NamingPreset::Ucs => TableNaming {
                struct_name: "keysym_ucs_pair".to_string(),
                table_name: "keysym_to_UCS_table".to_string(),
                code_point_type: "detail::code_point_t".to_string(),
                ..TableNaming::base()
            },
            NamingPreset::CodePoint => TableNaming {
                struct_name: "keysym_codepoint_pair".to_string(),
                table_name: "keysym_to_code_point_table".to_string(),
                code_point_type: "code_point_t".to_string(),
                ..TableNaming::base()
            },
        }
    }
}

/// Names of the emitted struct, array, scalar types and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNaming {
    pub struct_name: String,
    pub table_name: String,
    pub keysym_type: String,
    pub code_point_type: String,
    pub keysym_field: String,
    pub code_point_field: String,
}

impl TableNaming {
    fn base() -> Self {
        Self {
            struct_name: String::new(),
            table_name: String::new(),
            keysym_type: "keysym_t".to_string(),
            code_point_type: String::new(),
            keysym_field: "keysym".to_string(),
            code_point_field: "code_point".to_string(),
        }
    }

    /// `struct keysym_codepoint_pair { keysym_t keysym; code_point_t code_point; };`
    pub fn struct_fields(&self) -> [(&str, &str); 2] {
        [
            (self.keysym_type.as_str(), self.keysym_field.as_str()),
            (self.code_point_type.as_str(), self.code_point_field.as_str()),
        ]
    }

    /// Designated initializer for one table entry.
    pub fn entry(&self, pair: &ExtractedPair) -> String {
        format!(
            "{{.{} = {}({}u), .{} = {}({}u)}}",
            self.keysym_field,
            self.keysym_type,
            pair.code,
            self.code_point_field,
            self.code_point_type,
            pair.codepoint
        )
    }
}

impl From<NamingPreset> for TableNaming {
    fn from(preset: NamingPreset) -> Self {
        preset.naming()
    }
}
