use leptos::ev;
use leptos::html;
use leptos::prelude::*;

/// Yes/no prompt over the page.
///
/// Confirm is focused on open. Cancel, a click on the overlay outside the
/// dialog, and Escape all dismiss it.
#[component]
pub fn ConfirmModal(
    /// Question shown to the operator
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_ref = NodeRef::<html::Button>::new();

    Effect::new(move |_| {
        if let Some(button) = confirm_ref.get() {
            let _ = button.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    // Only clicks that land on the overlay itself dismiss
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            id="modal-overlay"
            on:click=move |_| on_cancel.run(())
            on:keydown=handle_keydown
        >
            <div class="modal" id="confirmation-modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <p class="modal-text">{message}</p>
                <div class="modal-actions">
                    <button
                        class="button button--primary"
                        id="confirm-btn"
                        node_ref=confirm_ref
                        on:click=move |_| on_confirm.run(())
                    >
                        "হ্যাঁ"
                    </button>
                    <button
                        class="button button--secondary"
                        id="cancel-btn"
                        on:click=move |_| on_cancel.run(())
                    >
                        "না"
                    </button>
                </div>
            </div>
        </div>
    }
}
