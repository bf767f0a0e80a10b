//! Placeholder shown before a reservoir is chosen.

use dioxus::prelude::*;

#[component]
pub fn EmptyReservoirState() -> Element {
    rsx! {
        div {
            style: "padding: 40px; text-align: center; color: #64748b; border: 1px dashed #cbd5e1; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; color: #334155;", "Nenhum reservatório selecionado" }
            p { style: "margin: 0;", "Escolha um reservatório acima para ver o estado de seca." }
        }
    }
}
