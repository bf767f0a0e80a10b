//! Page header with the dashboard title and the selected reservoir.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
    /// Name of the selected reservoir, appended after the title
    #[props(default = String::new())]
    pub reservoir_name: String,
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h1 {
                style: "margin: 0; font-size: 22px; font-weight: 600;",
                if props.reservoir_name.is_empty() {
                    "{props.title}"
                } else {
                    "{props.title}: {props.reservoir_name}"
                }
            }
        }
    }
}
