use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Ghost => "c-button--ghost",
            ButtonVariant::Danger => "c-button--danger",
        }
    }
}

/// Button, or a plain link styled as one when `href` is set
#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    href: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or_default().class();
    let disabled = disabled.unwrap_or(false);

    if let Some(href) = href {
        return rsx! {
            a { class: "c-button {variant_class}", href: "{href}", {children} }
        };
    }

    rsx! {
        button {
            class: "c-button {variant_class}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
