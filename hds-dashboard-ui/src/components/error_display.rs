//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Page-level error box shown when the backend could not be reached.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 24px; margin: 8px 0; text-align: center; background: #fef2f2; border: 1px solid #fecaca; border-radius: 8px;",
            h2 { style: "margin: 0 0 8px 0; font-size: 20px; color: #ef4444;", "Erro ao carregar os dados." }
            p {
                style: "margin: 0; color: #7f1d1d;",
                if props.message.is_empty() {
                    "Verifique se a API está em execução e tente novamente."
                } else {
                    "{props.message}"
                }
            }
        }
    }
}
