//! Dropdown selector for choosing a reservoir.

use crate::state::AppState;
use dioxus::prelude::*;

/// Reservoir dropdown selector.
/// Reads available reservoirs from AppState and updates selected_reservoir on change.
#[component]
pub fn ReservoirSelector() -> Element {
    let mut state = use_context::<AppState>();
    let reservoirs = state.reservoirs.read().clone();
    let selected = (state.selected_reservoir)();

    let on_change = move |evt: Event<FormData>| {
        let id = evt.value().parse::<i64>().ok();
        log::info!("reservoir selected: {:?}", id);
        state.selected_reservoir.set(id);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "reservoir-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Reservatório: "
            }
            select {
                id: "reservoir-select",
                onchange: on_change,
                option { value: "", selected: selected.is_none(), "Selecione um reservatório" }
                for reservoir in reservoirs.iter() {
                    option {
                        value: "{reservoir.id}",
                        selected: Some(reservoir.id) == selected,
                        "{reservoir.nome} - {reservoir.municipio}"
                    }
                }
            }
        }
    }
}
