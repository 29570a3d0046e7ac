//! New Item Form Component
//!
//! Text field plus submit button. Enter in the field submits too.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::TodoStateStoreFields;
use crate::store::{store_add_item, store_set_pending_input, use_todo_store};

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_todo_store();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = store.pending_input().get_untracked();
        store_add_item(&store, title);
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="form-row">
                <label for="item">"New Item"</label>
                <input
                    type="text"
                    id="item"
                    prop:value=move || store.pending_input().get()
                    on:input=move |ev| {
                        let input = ev
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
                        if let Some(input) = input {
                            store_set_pending_input(&store, input.value());
                        }
                    }
                />
            </div>
            <button type="submit" class="btn">"Add"</button>
        </form>
    }
}
