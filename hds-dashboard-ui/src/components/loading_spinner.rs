use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; font-size: 20px; font-weight: bold; color: #475569;",
            "Carregando dados do reservatório..."
        }
    }
}
