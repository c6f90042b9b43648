//! Scans Rust source for enum families: a scalar type alias plus typed constants.

use super::annotation::{parse_member_doc, parse_type_annotation};
use super::config::{Configuration, EnumTypeConfig};
use super::model::{EnumMember, EnumType, classify_underlying};
use super::source::Source;
use crate::error::{EnumforgeError, Result};
use std::collections::HashSet;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Item, ItemConst, ItemType, Lit, Type, UnOp};
use tracing::{debug, trace, warn};

/// Extracts enum families from Rust source files.
pub struct Parser {
    config: Configuration,
}

/// A type alias seen while scanning, before its constants are attached.
struct PendingType {
    enum_type: EnumType,
    annotated: bool,
}

impl Parser {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    pub fn parse(&self, source: &mut dyn Source) -> Result<Vec<EnumType>> {
        let filename = source.filename();
        let content = source.content()?;
        self.parse_str(&filename, &content)
    }

    pub fn parse_str(&self, filename: &str, content: &str) -> Result<Vec<EnumType>> {
        let file = syn::parse_file(content).map_err(|e| {
            warn!("Failed to parse {}: {}", filename, e);
            EnumforgeError::parse_source(filename, e.to_string())
        })?;

        let mut pending: Vec<PendingType> = Vec::new();
        for item in &file.items {
            if let Item::Type(item_type) = item {
                if let Some(found) = self.type_alias(item_type)? {
                    trace!("Found enum type alias {}", found.enum_type.type_name);
                    pending.push(found);
                }
            }
        }

        for item in &file.items {
            if let Item::Const(item_const) = item {
                let Some(type_name) = const_type_name(item_const) else {
                    continue;
                };
                let Some(owner) = pending
                    .iter_mut()
                    .find(|p| p.enum_type.type_name == type_name)
                else {
                    continue;
                };
                match member(item_const) {
                    Some(member) => owner.enum_type.members.push(member),
                    None => warn!(
                        "{}: constant {} is not a literal, skipping",
                        filename, item_const.ident
                    ),
                }
            }
        }

        let mut enums = Vec::new();
        for PendingType {
            enum_type,
            annotated,
        } in pending
        {
            if enum_type.members.is_empty() {
                if annotated {
                    return Err(EnumforgeError::invalid_annotation(format!(
                        "type {} in {} is annotated but declares no constants",
                        enum_type.type_name, filename
                    )));
                }
                continue;
            }
            warn_on_duplicates(filename, &enum_type);
            debug!(
                "{}: enum {} ({}) with {} member(s)",
                filename,
                enum_type.type_name,
                enum_type.kind,
                enum_type.members.len()
            );
            enums.push(enum_type);
        }

        Ok(enums)
    }

    fn type_alias(&self, item: &ItemType) -> Result<Option<PendingType>> {
        let type_name = item.ident.to_string();

        let mut annotation: Option<EnumTypeConfig> = None;
        for line in doc_lines(&item.attrs) {
            if let Some(config) = parse_type_annotation(&type_name, &line)? {
                annotation = Some(config);
            }
        }

        let underlying = type_text(&item.ty);
        let classified = underlying.as_deref().and_then(classify_underlying);
        let Some((kind, raw_type)) = classified else {
            if annotation.is_some() {
                return Err(EnumforgeError::invalid_annotation(format!(
                    "type {} must alias an integer, float, bool, &str or &[u8]",
                    type_name
                )));
            }
            return Ok(None);
        };

        let annotated = annotation.is_some();
        let config = annotation.unwrap_or_else(|| self.config.enum_type_config(&type_name));

        Ok(Some(PendingType {
            enum_type: EnumType {
                type_name,
                underlying: underlying.unwrap_or_default(),
                kind,
                raw_type: raw_type.to_string(),
                members: Vec::new(),
                config,
            },
            annotated,
        }))
    }
}

fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Renders the supported alias targets, `None` for anything else.
fn type_text(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.get_ident().map(|i| i.to_string()),
        Type::Reference(reference) if reference.mutability.is_none() => {
            let lifetime = reference
                .lifetime
                .as_ref()
                .map(|l| format!("'{} ", l.ident))
                .unwrap_or_default();
            let inner = match reference.elem.as_ref() {
                Type::Slice(slice) => format!("[{}]", type_text(&slice.elem)?),
                other => type_text(other)?,
            };
            Some(format!("&{lifetime}{inner}"))
        }
        Type::Paren(paren) => type_text(&paren.elem),
        _ => None,
    }
}

fn const_type_name(item: &ItemConst) -> Option<String> {
    match item.ty.as_ref() {
        Type::Path(path) if path.qself.is_none() => path.path.get_ident().map(|i| i.to_string()),
        _ => None,
    }
}

fn member(item: &ItemConst) -> Option<EnumMember> {
    let literal = literal_text(&item.expr)?;
    let doc = parse_member_doc(&doc_lines(&item.attrs));
    Some(EnumMember {
        ident: item.ident.to_string(),
        literal,
        aliases: doc.aliases,
        valid: doc.valid,
        comment: doc.comment,
    })
}

fn byte_string_literal(bytes: &[u8]) -> String {
    let escaped: String = bytes
        .iter()
        .flat_map(|byte| std::ascii::escape_default(*byte))
        .map(char::from)
        .collect();
    format!("b\"{escaped}\"")
}

fn literal_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Int(int) => Some(int.base10_digits().to_string()),
            Lit::Float(float) => Some(float.base10_digits().to_string()),
            Lit::Bool(b) => Some(b.value.to_string()),
            Lit::Str(s) => Some(format!("{:?}", s.value())),
            Lit::ByteStr(b) => Some(byte_string_literal(&b.value())),
            _ => None,
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => literal_text(expr).map(|inner| format!("-{inner}")),
        Expr::Paren(paren) => literal_text(&paren.expr),
        _ => None,
    }
}

fn warn_on_duplicates(filename: &str, enum_type: &EnumType) {
    let mut seen = HashSet::new();
    for member in &enum_type.members {
        if !seen.insert(member.literal.as_str()) {
            warn!(
                "{}: {}::{} repeats value {}; lookups by value return the first member",
                filename, enum_type.type_name, member.ident, member.literal
            );
        }
    }
}
