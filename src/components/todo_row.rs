//! Todo Row Component
//!
//! A single list entry: checkbox, title, delete button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Item;
use crate::store::{store_delete_item, store_toggle_item, use_todo_store};

/// A single item row in the list
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let store = use_todo_store();

    let id = item.id;
    let completed = item.completed;

    view! {
        <li class=if completed { "completed" } else { "" }>
            <label>
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |ev| {
                        let input = ev
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
                        if let Some(input) = input {
                            store_toggle_item(&store, id, input.checked());
                        }
                    }
                />
                {item.title}
            </label>
            <button class="btn btn-danger" on:click=move |_| store_delete_item(&store, id)>
                "Delete"
            </button>
        </li>
    }
}
