use crate::derive_utils::{AttrArgs, apply_derives};
use crate::field_utils::ensure_leading_fields;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, LitStr, Type, parse_macro_input};

/// #[resource] 宏实现
/// - 若缺失则追加字段：`guid: ::cf_domain::guid::Guid`, `name: String`，并置于字段最前
/// - 自动实现 `::cf_domain::resource::Resource`
/// - 支持参数：`#[resource(kind = "...", debug = true|false)]`；
///   - `kind` 默认取结构体名的小写形式，用于错误提示（如 "App my-app not found"）
///   - `debug` 默认 `true`（派生 Debug）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttrArgs);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[resource] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let (kind, derive_debug) = match parse_args(&args) {
        Ok(v) => v,
        Err(err) => return err.to_compile_error().into(),
    };
    let kind = kind.unwrap_or_else(|| {
        LitStr::new(&st.ident.to_string().to_lowercase(), st.ident.span())
    });

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "#[resource] only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let guid_ty: Type = syn::parse_quote! { ::cf_domain::guid::Guid };
    let name_ty: Type = syn::parse_quote! { String };
    ensure_leading_fields(fields_named, &[("guid", &guid_ty), ("name", &name_ty)]);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Default),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if derive_debug {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let expanded = quote! {
        #st

        impl #impl_generics ::cf_domain::resource::Resource for #ident #ty_generics #where_clause {
            const KIND: &'static str = #kind;

            fn name(&self) -> &str { &self.name }

            fn guid(&self) -> &::cf_domain::guid::Guid { &self.guid }
        }
    };

    TokenStream::from(expanded)
}

fn parse_args(args: &AttrArgs) -> syn::Result<(Option<LitStr>, bool)> {
    args.reject_unknown(&["kind", "debug"])?;
    let kind = args.str_value("kind")?;
    let debug = args.bool_flag("debug")?.unwrap_or(true);
    Ok((kind, debug))
}
