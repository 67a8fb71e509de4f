use proc_macro2::*;
use quote::quote;
use syn::*;

/// Field-less enum a derive is applied to.
struct EnumInput {
	name:     Ident,
	variants: Vec<Variant>,
}

impl EnumInput {
	fn parse(item: TokenStream, derive: &str) -> Result<Self> {
		let input = parse2::<DeriveInput>(item)?;
		match input.data {
			Data::Enum(data) => Ok(Self { name: input.ident, variants: data.variants.into_iter().collect() }),
			_ => Err(Error::new(input.ident.span(), format!("`{derive}` can only be derived for an enum"))),
		}
	}

	fn idents(&self) -> impl Iterator<Item = &Ident> {
		self.variants.iter().map(|variant| &variant.ident)
	}
}

/// Values of all `#[name("..")]` attributes on a variant.
fn string_attrs(variant: &Variant, name: &str) -> Result<Vec<String>> {
	variant.attrs.iter()
		.filter(|attr| attr.path().is_ident(name))
		.map(|attr| attr.parse_args::<LitStr>().map(|lit| lit.value()))
		.collect()
}

fn expand(item: TokenStream, derive: &str, generate: impl FnOnce(EnumInput) -> Result<TokenStream>) -> TokenStream {
	EnumInput::parse(item, derive)
		.and_then(generate)
		.unwrap_or_else(|err| err.to_compile_error())
}

pub fn enum_count(item: TokenStream) -> TokenStream {
	expand(item, "EnumCount", |input| {
		let name = &input.name;
		let count = input.variants.len();
		Ok(quote!(
			impl unidb_base::EnumCountT for #name {
				const COUNT : usize = #count;
			}
		))
	})
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
	expand(item, "EnumFromIndex", |input| {
		let mut next = 0usize;
		let mut indices = Vec::with_capacity(input.variants.len());
		for variant in &input.variants {
			let index = match &variant.discriminant {
				None => next,
				Some((_, Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }))) => lit.base10_parse::<usize>()?,
				Some((_, expr)) => return Err(Error::new_spanned(expr, "`EnumFromIndex` needs integer discriminants")),
			};
			indices.push(index);
			next = index + 1;
		}

		let name = &input.name;
		let idents = input.idents();
		Ok(quote!(
			impl unidb_base::EnumFromIndexT for #name {
				fn from_idx(idx: usize) -> Option<Self> {
					Some(match idx {
						#(#indices => Self::#idents,)*
						_ => return None,
					})
				}
			}
		))
	})
}

pub fn enum_display(item: TokenStream) -> TokenStream {
	expand(item, "EnumDisplay", |input| {
		let texts = input.variants.iter()
			.map(|variant| Ok(string_attrs(variant, "display")?.into_iter().next().unwrap_or_else(|| variant.ident.to_string())))
			.collect::<Result<Vec<_>>>()?;

		let name = &input.name;
		let idents = input.idents();
		Ok(quote!(
			impl ::core::fmt::Display for #name {
				fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
					f.write_str(match self {
						#(Self::#idents => #texts,)*
					})
				}
			}
		))
	})
}

pub fn enum_from_name(item: TokenStream) -> TokenStream {
	expand(item, "EnumFromName", |input| {
		let patterns = input.variants.iter()
			.map(|variant| {
				let mut names = string_attrs(variant, "parse_name")?;
				if names.is_empty() {
					names.push(variant.ident.to_string());
				}
				Ok(quote!(#(#names)|*))
			})
			.collect::<Result<Vec<_>>>()?;

		let name = &input.name;
		let idents = input.idents();
		Ok(quote!(
			impl unidb_base::EnumFromNameT for #name {
				fn parse(s: &str) -> Option<Self> {
					Some(match s {
						#(#patterns => Self::#idents,)*
						_ => return None,
					})
				}
			}
		))
	})
}
