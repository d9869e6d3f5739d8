use dioxus::prelude::*;

use crate::vm::GenerationFailureVm;

#[component]
pub fn GenerationFailure(failure: GenerationFailureVm) -> Element {
    rsx! {
        div { class: "banner error", "❌ Error: {failure.reason}" }
        p { class: "sentinel", "{failure.sentinel}" }
    }
}
