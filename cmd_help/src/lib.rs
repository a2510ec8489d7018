use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

fn extract_doc(attrs: &[syn::Attribute]) -> Vec<String> {
    let mut lines = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("doc")
            && let syn::Meta::NameValue(nv) = &attr.meta
            && let syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) = &nv.value
        {
            lines.push(s.value().trim().to_string());
        }
    }
    lines
}

/// 为只包含单元变体的枚举生成命令行标志与帮助信息。
///
/// 每个变体文档的第一个单词即为标志，例如`/// -v 打印详细信息。`，剩余部分为帮助信息。
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let mut flags = Vec::new();
    let mut docs = Vec::new();
    let mut idents = Vec::new();
    for v in variants {
        if !matches!(v.fields, Fields::Unit) {
            return syn::Error::new_spanned(v, "CmdHelp only supports unit variants").to_compile_error().into();
        }
        let lines = extract_doc(&v.attrs);
        let Some((flag, first)) = lines.first().and_then(|line| {
            let mut parts = line.splitn(2, char::is_whitespace);
            parts.next().filter(|flag| flag.starts_with('-')).map(|flag| (flag.to_string(), parts.next()))
        }) else {
            return syn::Error::new_spanned(v, "doc of variant must start with a flag, like `/// -h help`")
                .to_compile_error()
                .into();
        };
        let mut doc = vec![first.unwrap_or_default().trim().to_string()];
        doc.extend(lines.iter().skip(1).cloned());
        flags.push(flag);
        docs.push(doc.join("\n"));
        idents.push(&v.ident);
    }

    let expanded = quote! {
        impl #enum_name {
            /// 获取命令行标志。
            pub fn flag(&self) -> &'static str {
                match self {
                    #(Self::#idents => #flags,)*
                }
            }

            /// 获取帮助信息。
            pub fn help(&self) -> &'static str {
                match self {
                    #(Self::#idents => #docs,)*
                }
            }

            /// 根据命令行标志查找。
            pub fn from_flag(flag: &str) -> Option<Self> {
                match flag {
                    #(#flags => Some(Self::#idents),)*
                    _ => None,
                }
            }

            /// 获取全部帮助信息：[(flag, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #((#flags, #docs)),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
