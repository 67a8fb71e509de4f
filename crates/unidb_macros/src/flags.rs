use proc_macro2::*;
use quote::{quote, ToTokens};
use syn::{punctuated::Punctuated, *};

/// Backing integer of a flag set.
#[derive(Clone, Copy)]
enum Backing {
	U8,
	U16,
	U32,
	U64,
	U128,
}

impl Backing {
	fn from_ident(ident: &Ident) -> Option<Self> {
		Some(match ident.to_string().as_str() {
			"u8"   => Self::U8,
			"u16"  => Self::U16,
			"u32"  => Self::U32,
			"u64"  => Self::U64,
			"u128" => Self::U128,
			_ => return None,
		})
	}

	fn fitting(max: u128) -> Self {
		[Self::U8, Self::U16, Self::U32, Self::U64].into_iter()
			.find(|backing| max <= backing.limit())
			.unwrap_or(Self::U128)
	}

	fn limit(self) -> u128 {
		match self {
			Self::U8   => u8::MAX as u128,
			Self::U16  => u16::MAX as u128,
			Self::U32  => u32::MAX as u128,
			Self::U64  => u64::MAX as u128,
			Self::U128 => u128::MAX,
		}
	}

	fn ident(self) -> Ident {
		let name = match self {
			Self::U8   => "u8",
			Self::U16  => "u16",
			Self::U32  => "u32",
			Self::U64  => "u64",
			Self::U128 => "u128",
		};
		Ident::new(name, Span::call_site())
	}
}

/// Arguments of `#[flags(..)]`.
#[derive(Default)]
struct FlagsArgs {
	backing:         Option<Backing>,
	parse_from_name: bool,
}

impl parse::Parse for FlagsArgs {
	fn parse(input: parse::ParseStream) -> Result<Self> {
		let mut args = FlagsArgs::default();
		for ident in Punctuated::<Ident, Token![,]>::parse_terminated(input)? {
			if let Some(backing) = Backing::from_ident(&ident) {
				args.backing = Some(backing);
			} else if ident == "parse_from_name" {
				args.parse_from_name = true;
			} else {
				return Err(Error::new(ident.span(), format!("unknown `#[flags]` argument `{ident}`")));
			}
		}
		Ok(args)
	}
}

/// A single flag, with its value as a const expression.
struct Flag {
	ident:      Ident,
	attrs:      Vec<Attribute>,
	value:      TokenStream,
	parse_name: String,
}

/// Collected enum, after bits have been assigned.
struct FlagSet {
	flags:     Vec<Flag>,
	none_name: Option<String>,
	max_bit:   u128,
}

impl FlagSet {
	fn collect(variants: impl IntoIterator<Item = Variant>) -> Result<Self> {
		let mut set = FlagSet { flags: Vec::new(), none_name: None, max_bit: 0 };
		let mut next_bit : u128 = 1;

		for variant in variants {
			let (parse_name, attrs) = split_parse_name(&variant)?;
			let value = match &variant.discriminant {
				Some((_, expr)) => {
					let (value, literal) = flag_value(expr)?;
					match literal {
						Some(0) => set.none_name = Some(variant.ident.to_string()),
						Some(literal) => {
							set.max_bit = set.max_bit.max(literal);
							next_bit = literal << 1;
						},
						None => {},
					}
					value
				},
				None => {
					if !next_bit.is_power_of_two() {
						return Err(Error::new(variant.ident.span(), "the flag before this one must be a single bit"));
					}
					let bit = next_bit;
					set.max_bit = set.max_bit.max(bit);
					next_bit <<= 1;
					quote!(#bit)
				},
			};

			set.flags.push(Flag { ident: variant.ident, attrs, value, parse_name });
		}
		Ok(set)
	}
}

/// Take the `#[parse_name("..")]` attribute off a variant, defaulting to the variant's name.
fn split_parse_name(variant: &Variant) -> Result<(String, Vec<Attribute>)> {
	let mut parse_name = None;
	let mut attrs = Vec::new();
	for attr in &variant.attrs {
		if !attr.path().is_ident("parse_name") {
			attrs.push(attr.clone());
			continue;
		}
		if parse_name.is_some() {
			return Err(Error::new_spanned(attr, "duplicate `parse_name`"));
		}
		parse_name = Some(attr.parse_args::<LitStr>()?.value());
	}
	Ok((parse_name.unwrap_or_else(|| variant.ident.to_string()), attrs))
}

/// Convert a discriminant to a `u128` const expression, also returning its value if it is a literal.
fn flag_value(expr: &Expr) -> Result<(TokenStream, Option<u128>)> {
	match expr {
		Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => {
			let value = lit.base10_parse::<u128>()?;
			Ok((quote!(#value), Some(value)))
		},
		Expr::Path(path) => match path.path.get_ident() {
			Some(ident) => Ok((quote!(Self::#ident.bits as u128), None)),
			None => Err(Error::new_spanned(path, "expected the name of an earlier flag")),
		},
		Expr::Binary(ExprBinary { left, right, op: BinOp::BitOr(_), .. }) => {
			let (left, _) = flag_value(left)?;
			let (right, _) = flag_value(right)?;
			Ok((quote!(#left | #right), None))
		},
		Expr::Paren(paren) => flag_value(&paren.expr),
		_ => Err(Error::new_spanned(expr, "expected an integer, an earlier flag, or flags combined with `|`")),
	}
}

pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
	match expand(args, input) {
		Ok(tokens) => tokens,
		Err(err) => err.to_compile_error(),
	}
}

fn expand(args: TokenStream, input: TokenStream) -> Result<TokenStream> {
	let args = parse2::<FlagsArgs>(args)?;
	let input = parse2::<DeriveInput>(input)?;
	let Data::Enum(data) = input.data else {
		return Err(Error::new(input.ident.span(), "`#[flags]` can only be used on an enum"));
	};

	let set = FlagSet::collect(data.variants)?;
	let backing = args.backing.unwrap_or_else(|| Backing::fitting(set.max_bit)).ident();

	let vis = &input.vis;
	let name = &input.ident;
	let attrs = &input.attrs;

	let idents = set.flags.iter().map(|flag| &flag.ident).collect::<Vec<_>>();
	let consts = set.flags.iter().map(|flag| {
		let Flag { ident, attrs, value, .. } = flag;
		quote!(#(#attrs)* #vis const #ident : #name = #name { bits: (#value) as #backing };)
	});

	let none_const = match set.none_name {
		Some(_) => TokenStream::new(),
		None => quote!(
			/// No flags set.
			#vis const None : #name = #name::none();
		),
	};
	let none_name = set.none_name.unwrap_or_else(|| "None".to_string());

	let parse = args.parse_from_name.then(|| {
		let names = set.flags.iter().map(|flag| &flag.parse_name);
		quote!(
			/// Parse `|` separated flag names.
			#vis fn parse(names: &str) -> Option<Self> {
				names.split('|').try_fold(Self::none(), |acc, name| Some(acc | match name.trim() {
					#(#names => Self::#idents,)*
					_ => return None,
				}))
			}
		)
	});

	let mut tokens = quote!(
		#(#attrs)*
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#[repr(transparent)]
		#vis struct #name {
			bits: #backing,
		}

		#[allow(non_upper_case_globals)]
		impl #name {
			#none_const
			#(#consts)*

			/// Flags from raw bits, bits that don't belong to a flag are kept.
			#vis const fn from_bits(bits: #backing) -> Self {
				Self { bits }
			}

			#vis const fn none() -> Self {
				Self { bits: 0 }
			}

			/// All declared flags.
			#vis const fn all() -> Self {
				Self { bits: 0 #(| Self::#idents.bits)* }
			}

			#vis const fn bits(&self) -> #backing {
				self.bits
			}

			/// Whether every flag in `other` is set.
			#vis const fn contains(&self, other: Self) -> bool {
				self.bits & other.bits == other.bits
			}

			/// Whether any flag in `other` is set.
			#vis const fn intersects(&self, other: Self) -> bool {
				self.bits & other.bits != 0
			}

			#vis const fn is_none(&self) -> bool {
				self.bits == 0
			}

			/// Whether only declared flags are set.
			#vis const fn is_valid(&self) -> bool {
				self.bits & !Self::all().bits == 0
			}

			#vis fn set(&mut self, flags: Self, enabled: bool) {
				if enabled {
					self.bits |= flags.bits;
				} else {
					self.bits &= !flags.bits;
				}
			}

			#parse
		}

		impl ::core::default::Default for #name {
			fn default() -> Self {
				Self::none()
			}
		}

		impl ::core::convert::From<#name> for #backing {
			fn from(flags: #name) -> Self {
				flags.bits
			}
		}

		impl ::core::ops::Not for #name {
			type Output = Self;
			fn not(self) -> Self {
				Self { bits: !self.bits }
			}
		}

		impl ::core::fmt::Debug for #name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				if self.is_none() {
					return f.write_str(#none_name);
				}

				let mut rest = self.bits;
				let mut separator = "";
				for (flag, flag_name) in [#((Self::#idents, stringify!(#idents)),)*] {
					if flag.bits != 0 && rest & flag.bits == flag.bits {
						write!(f, "{separator}{flag_name}")?;
						rest &= !flag.bits;
						separator = " | ";
					}
				}
				if rest != 0 {
					write!(f, "{separator}{rest:#x}")?;
				}
				Ok(())
			}
		}
	);

	for (op, method, assign_op, assign_method, symbol) in [
		("BitAnd", "bitand", "BitAndAssign", "bitand_assign", quote!(&)),
		("BitOr", "bitor", "BitOrAssign", "bitor_assign", quote!(|)),
	] {
		let op = Ident::new(op, Span::call_site());
		let method = Ident::new(method, Span::call_site());
		let assign_op = Ident::new(assign_op, Span::call_site());
		let assign_method = Ident::new(assign_method, Span::call_site());
		quote!(
			impl ::core::ops::#op for #name {
				type Output = Self;
				fn #method(self, rhs: Self) -> Self {
					Self { bits: self.bits #symbol rhs.bits }
				}
			}

			impl ::core::ops::#assign_op for #name {
				fn #assign_method(&mut self, rhs: Self) {
					*self = ::core::ops::#op::#method(*self, rhs);
				}
			}
		).to_tokens(&mut tokens);
	}

	Ok(tokens)
}
