use dioxus::prelude::*;
use services::ConfigIssue;

/// Blocking configuration problems, shown above every screen.
#[component]
pub fn ConfigBanners(issues: Vec<ConfigIssue>) -> Element {
    rsx! {
        for issue in issues {
            div { class: "banner error", "⚠️ {issue}" }
        }
    }
}
