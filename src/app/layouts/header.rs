use dioxus::prelude::*;

use crate::app::components::SermonSearch;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "c-header",
            nav { class: "c-header__nav",
                a { class: "c-header__home", href: "/", "Home" }
                div { class: "c-header__search",
                    SermonSearch {}
                }
            }
        }
    }
}
