use crate::element::HtmlElement;
use crate::property::PropertyDescriptor;

macro_rules! global_attributes {
    (
        $(
            $(#[$attr:meta])*
            $get:ident, $set:ident: $kind:ident $name:literal;
        )*
    ) => {
        /// Attributes declared on every element class, in registration order.
        ///
        /// `class` and `style` are not in here: the wrapper handles style through
        /// [`HtmlElement::style`] and the class list through `className`.
        pub const GLOBAL_ATTRIBUTES: &[PropertyDescriptor] = &[
            $( descriptor!($kind $name), )*
        ];

        /// Typed accessors for [`GLOBAL_ATTRIBUTES`], available on every wrapper.
        ///
        /// A tag that declares one of these names itself gets an inherent accessor of
        /// the same name, which takes precedence over the trait method.
        #[rustfmt::skip]
        pub trait GlobalAttributes: HtmlElement {
            $(
                accessor!($kind $get, $set, $name);
            )*
        }
    };
}

// A subset of the official list, trying to capture the most used ones.
// https://developer.mozilla.org/en-US/docs/Web/HTML/Global_attributes
global_attributes! {
    accesskey, set_accesskey: attr "accesskey";
    autocapitalize, set_autocapitalize: attr "autocapitalize";
    autofocus, set_autofocus: flag "autofocus";
    draggable, set_draggable: attr "draggable";
    enterkeyhint, set_enterkeyhint: attr "enterkeyhint";
    hidden, set_hidden: flag "hidden";
    id, set_id: attr "id";
    lang, set_lang: attr "lang";
    nonce, set_nonce: attr "nonce";
    part, set_part: attr "part";
    popover, set_popover: attr "popover";
    slot, set_slot: attr "slot";
    spellcheck, set_spellcheck: attr "spellcheck";
    tabindex, set_tabindex: attr "tabindex";
    title, set_title: attr "title";
    translate, set_translate: attr "translate";
    virtualkeyboardpolicy, set_virtualkeyboardpolicy: attr "virtualkeyboardpolicy";
    class_name, set_class_name: live "className";
}

impl<T: HtmlElement + ?Sized> GlobalAttributes for T {}
