use serde::{Deserialize, Serialize};

/// Function names that are never evaluated against any rule.
pub const LIFECYCLE_HOOKS: [&str; 2] = ["init", "main"];

/// Structural summary of one formal parameter.
///
/// `position` is the zero-based slot in the flattened parameter list: every
/// name of a multi-name group (`a, b int`) takes its own slot, and slots of
/// parameters with an unsupported shape are still consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub position: usize,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_alias: Option<String>,
    pub is_pointer: bool,
    pub is_array: bool,
}

impl ArgumentDescriptor {
    /// A descriptor for an unqualified, non-pointer, non-array type.
    pub fn plain(position: usize, type_name: &str) -> Self {
        Self {
            position,
            type_name: type_name.to_string(),
            namespace_path: None,
            namespace_alias: None,
            is_pointer: false,
            is_array: false,
        }
    }
}

impl std::fmt::Display for ArgumentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_array {
            f.write_str("[]")?;
        }
        if self.is_pointer {
            f.write_str("*")?;
        }
        if let Some(alias) = &self.namespace_alias {
            write!(f, "{alias}.")?;
        }
        f.write_str(&self.type_name)
    }
}

/// Where a declaration starts in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclSite {
    /// 1-based line.
    pub line: u32,
    /// 1-based column, in bytes.
    pub column: u32,
    /// Byte offset from the start of the file.
    pub offset: usize,
}

/// Everything the matcher needs to know about one function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionContext {
    pub file_name: String,
    pub func_name: String,
    /// Empty when the function has no receiver.
    pub receiver_type_name: String,
    pub descriptors: Vec<ArgumentDescriptor>,
}

impl FunctionContext {
    pub fn new(
        file_name: &str,
        func_name: &str,
        receiver_type_name: &str,
        descriptors: Vec<ArgumentDescriptor>,
    ) -> Self {
        Self {
            file_name: file_name.to_string(),
            func_name: func_name.to_string(),
            receiver_type_name: receiver_type_name.to_string(),
            descriptors,
        }
    }

    /// `init` and `main` are language lifecycle hooks, never user call sites.
    pub fn is_lifecycle_hook(&self) -> bool {
        LIFECYCLE_HOOKS.contains(&self.func_name.as_str())
    }
}
