#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod axiom;
mod expression;
mod keyword;
mod layout;
mod renderer;
mod short_form;
mod swrl;

pub use renderer::{ManchesterRenderer, RenderNode, WriterManchesterRenderer, to_manchester_string};
pub use short_form::{
    BidirectionalShortFormProvider, PrefixShortFormProvider, QuotedIriShortFormProvider,
    ShortFormProvider, SimpleShortFormProvider,
};
