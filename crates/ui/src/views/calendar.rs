use chrono::Datelike;
use dioxus::prelude::*;
use lernplan_core::model::UserId;

use crate::context::{AppContext, use_ui_session};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CalendarCellVm, map_month_overview};

/// Month grid coloured by how much of each day's work was recorded.
#[component]
pub fn CalendarView(user: UserId) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let progress = ctx.progress();
    let today = progress.today();
    let mut shown = use_signal(|| (today.year(), today.month()));

    let resource = use_resource(move || {
        let progress = progress.clone();
        let user = user.clone();
        let (year, month) = shown();
        let _revision = *session.progress_revision.read();
        async move {
            let overview = progress
                .month_overview(&user, year, month)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(map_month_overview(&overview))
        }
    });

    rsx! {
        div { class: "calendar",
            match view_state_from_resource(&resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => {
                    let previous = vm.previous;
                    let next = vm.next;
                    rsx! {
                        div { class: "calendar-nav",
                            button { title: "Previous month", onclick: move |_| shown.set(previous), "‹" }
                            h4 { "{vm.title}" }
                            button { title: "Next month", onclick: move |_| shown.set(next), "›" }
                        }
                        table { class: "calendar-grid",
                            thead {
                                tr {
                                    for label in vm.weekday_labels {
                                        th { "{label}" }
                                    }
                                }
                            }
                            tbody {
                                for week in vm.weeks {
                                    tr {
                                        for cell in week {
                                            CalendarCell { cell }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn CalendarCell(cell: CalendarCellVm) -> Element {
    let class = cell.class();
    let icon = cell.icon();
    match cell {
        CalendarCellVm::Blank => rsx! {
            td { class }
        },
        CalendarCellVm::Day { day, .. } => rsx! {
            td { class,
                span { class: "calendar-day", "{day}" }
                if !icon.is_empty() {
                    span { class: "calendar-icon", "{icon}" }
                }
            }
        },
    }
}
