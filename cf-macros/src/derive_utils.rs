use quote::ToTokens;
use std::collections::HashSet;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, MetaNameValue, Result, Token};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) =
                attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
            {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 合并默认与已有 derive（去重，优先保留 required）
pub(crate) fn merge_derives(existing: Vec<syn::Path>, required: Vec<syn::Path>) -> Attribute {
    let mut seen = HashSet::<String>::new();
    let final_list: Vec<syn::Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();
    syn::parse_quote!(#[derive(#(#final_list),*)])
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
pub(crate) fn derive_key(p: &syn::Path) -> String {
    match p.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            match ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{ident}"),
                _ => ident,
            }
        }
        None => p.to_token_stream().to_string(),
    }
}

pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);
    let merged = merge_derives(existing, required);
    *attrs = std::iter::once(merged).chain(retained).collect();
}

/// 宏参数：`key = value` 列表，值为布尔或字符串字面量
pub(crate) struct AttrArgs {
    pairs: Vec<MetaNameValue>,
}

impl Parse for AttrArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let list = Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)?;
        let mut seen = HashSet::new();
        for pair in list.iter() {
            let key = pair.path.to_token_stream().to_string();
            if !seen.insert(key.clone()) {
                return Err(syn::Error::new(
                    pair.span(),
                    format!("duplicate key '{key}' in attribute"),
                ));
            }
        }
        Ok(Self {
            pairs: list.into_iter().collect(),
        })
    }
}

impl AttrArgs {
    pub(crate) fn reject_unknown(&self, allowed: &[&str]) -> Result<()> {
        for pair in &self.pairs {
            if !allowed.iter().any(|k| pair.path.is_ident(k)) {
                return Err(syn::Error::new(
                    pair.path.span(),
                    format!("unknown key in attribute; expected one of {allowed:?}"),
                ));
            }
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&MetaNameValue> {
        self.pairs.iter().find(|p| p.path.is_ident(key))
    }

    pub(crate) fn bool_flag(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(MetaNameValue {
                value:
                    Expr::Lit(ExprLit {
                        lit: Lit::Bool(b), ..
                    }),
                ..
            }) => Ok(Some(b.value())),
            Some(other) => Err(syn::Error::new(
                other.value.span(),
                format!("expected boolean literal for '{key}'"),
            )),
        }
    }

    pub(crate) fn str_value(&self, key: &str) -> Result<Option<LitStr>> {
        match self.get(key) {
            None => Ok(None),
            Some(MetaNameValue {
                value:
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }),
                ..
            }) => Ok(Some(s.clone())),
            Some(other) => Err(syn::Error::new(
                other.value.span(),
                format!("expected string literal for '{key}'"),
            )),
        }
    }
}
