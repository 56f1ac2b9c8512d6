use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

fn extract_doc(attrs: &[syn::Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("doc") {
            if let syn::Meta::NameValue(nv) = &attr.meta {
                if let syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) = &nv.value {
                    lines.push(s.value().trim().to_owned());
                }
            }
        }
    }
    lines.join("\n")
}

fn variant_pattern(v: &syn::Variant) -> proc_macro2::TokenStream {
    let variant_name = &v.ident;
    match &v.fields {
        Fields::Unit => quote! { #variant_name },
        Fields::Unnamed(fields) => {
            let wildcards = std::iter::repeat_n(quote! { _ }, fields.unnamed.len());
            quote! { #variant_name(#(#wildcards),*) }
        }
        Fields::Named(_) => quote! { #variant_name { .. } },
    }
}

/// 为操作描述枚举生成`name()`、`help()`和`all_help()`。
/// 操作名为变体名的小写形式，说明取自变体的文档注释。
#[proc_macro_derive(OpHelp)]
pub fn op_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        panic!("OpHelp can only be derived on enums");
    };

    let name_entries = variants.iter().map(|v| {
        let pattern = variant_pattern(v);
        let name = v.ident.to_string().to_lowercase();
        quote! {
            Self::#pattern => #name,
        }
    });

    let help_entries = variants.iter().map(|v| {
        let pattern = variant_pattern(v);
        let doc = extract_doc(&v.attrs);
        quote! {
            Self::#pattern => #doc,
        }
    });

    let all_help_entries = variants.iter().map(|v| {
        let name = v.ident.to_string().to_lowercase();
        let doc = extract_doc(&v.attrs);
        quote! {
            (#name, #doc)
        }
    });

    let expanded = quote! {
        impl #impl_generics #enum_name #ty_generics #where_clause {
            /// 操作名。
            pub fn name(&self) -> &'static str {
                match self {
                    #(#name_entries)*
                }
            }

            /// 操作说明。
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_entries)*
                }
            }

            /// 全部操作说明：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #(#all_help_entries),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
