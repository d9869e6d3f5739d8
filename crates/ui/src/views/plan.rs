use dioxus::prelude::*;

use crate::context::use_ui_session;
use crate::vm::{PlanRowVm, plan_phases};

#[component]
pub fn PlanView() -> Element {
    let session = use_ui_session();
    let study_day = session.state.read().study_day();
    let phases = plan_phases(study_day);

    rsx! {
        section { class: "page plan",
            h2 { "The Complete 120-Day Sustainable German Plan" }
            for phase in phases {
                h3 { "{phase.title}" }
                p {
                    strong { "Goal: " }
                    "{phase.goal}"
                }
                table { class: "plan-table",
                    thead {
                        tr {
                            th { "Days" }
                            th { "Focus Topic" }
                            th { "Grammar & Structure" }
                            th { "Vocabulary (Thematic)" }
                            th { "Practice Activities" }
                        }
                    }
                    tbody {
                        for row in phase.rows {
                            PlanRow { row }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanRow(row: PlanRowVm) -> Element {
    let class = if row.is_current { "current" } else { "" };
    rsx! {
        tr { class,
            td { "{row.days}" }
            td { dangerous_inner_html: "{row.topic_html}" }
            td { dangerous_inner_html: "{row.grammar_html}" }
            td { dangerous_inner_html: "{row.vocabulary_html}" }
            td { dangerous_inner_html: "{row.activity_html}" }
        }
    }
}
