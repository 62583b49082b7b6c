//! Descriptor extraction: parameter shapes → [`ArgumentDescriptor`]s.
//!
//! Extraction is a pure function of a declaration and its file's import
//! table. A parameter whose shape cannot be reduced yields no descriptor but
//! still consumes its slot, so later descriptors keep their declared
//! positions.
//!
//! Accepted shapes, with `X` being `T` or `alias.T`:
//!
//! | declared   | is_array | is_pointer |
//! |------------|----------|------------|
//! | `X`        | false    | false      |
//! | `*X`       | false    | true       |
//! | `[]X`      | true     | false      |
//! | `[]*X`     | true     | true       |
//! | `*[]X`     | true     | false      |
//! | `*[]*X`    | true     | true       |
//!
//! For `*[]...` the outer pointer is absorbed and pointer-ness is read from
//! the element. Everything else (`**X`, `[][]X`, maps, generics, ...) is
//! unsupported.

use argguard_core::types::{ArgumentDescriptor, FunctionContext};

use crate::go::{FuncDecl, ImportTable, TypeShape};

/// A shape reduced to its base type plus the two wrapper flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduced<'a> {
    pub type_name: &'a str,
    pub alias: Option<&'a str>,
    pub is_pointer: bool,
    pub is_array: bool,
}

/// Reduce a shape, or `None` when it is unsupported.
pub fn reduce(shape: &TypeShape) -> Option<Reduced<'_>> {
    match shape {
        TypeShape::Array(element) => reduce_element(element).map(into_array),
        TypeShape::Pointer(inner) => match inner.as_ref() {
            TypeShape::Array(element) => reduce_element(element).map(into_array),
            other => base(other).map(|r| Reduced {
                is_pointer: true,
                ..r
            }),
        },
        other => base(other),
    }
}

fn into_array(r: Reduced<'_>) -> Reduced<'_> {
    Reduced {
        is_array: true,
        ..r
    }
}

/// Element of an array: `X` or `*X`.
fn reduce_element(shape: &TypeShape) -> Option<Reduced<'_>> {
    match shape {
        TypeShape::Pointer(inner) => base(inner).map(|r| Reduced {
            is_pointer: true,
            ..r
        }),
        other => base(other),
    }
}

fn base(shape: &TypeShape) -> Option<Reduced<'_>> {
    match shape {
        TypeShape::Ident(name) => Some(Reduced {
            type_name: name.as_str(),
            alias: None,
            is_pointer: false,
            is_array: false,
        }),
        TypeShape::Qualified { alias, name } => Some(Reduced {
            type_name: name.as_str(),
            alias: Some(alias.as_str()),
            is_pointer: false,
            is_array: false,
        }),
        _ => None,
    }
}

impl Reduced<'_> {
    fn into_descriptor(self, position: usize, imports: &ImportTable) -> ArgumentDescriptor {
        ArgumentDescriptor {
            position,
            type_name: self.type_name.to_string(),
            namespace_path: self
                .alias
                .and_then(|a| imports.resolve(a))
                .map(str::to_string),
            namespace_alias: self.alias.map(str::to_string),
            is_pointer: self.is_pointer,
            is_array: self.is_array,
        }
    }
}

/// Descriptors for every supported parameter of `decl`, in declaration order.
pub fn extract(decl: &FuncDecl, imports: &ImportTable) -> Vec<ArgumentDescriptor> {
    let mut descriptors = Vec::with_capacity(decl.arity());
    let mut position = 0;
    for group in &decl.params {
        let reduced = reduce(&group.shape);
        if reduced.is_none() {
            tracing::trace!(
                func = %decl.name,
                position,
                shape = ?group.shape,
                "unsupported parameter shape"
            );
        }
        for _ in 0..group.slot_count() {
            if let Some(r) = reduced.clone() {
                descriptors.push(r.into_descriptor(position, imports));
            }
            position += 1;
        }
    }
    descriptors
}

/// The per-declaration context handed to the matcher.
pub fn function_context(file_name: &str, decl: &FuncDecl, imports: &ImportTable) -> FunctionContext {
    FunctionContext::new(
        file_name,
        &decl.name,
        &decl.receiver_type_name,
        extract(decl, imports),
    )
}
