//! Internship Form - posts a new internship to the board
//!
//! The submit handler always suppresses the browser's default navigation,
//! then hands the form to `SubmitInternship` on a spawned task. Each submit
//! event spawns its own task; nothing stops a second submission while the
//! first is still in flight.

use dioxus::prelude::*;
use std::sync::Arc;

use internhub_client::ports::outbound::FormPort;
use internhub_client::SubmitInternship;
use internhub_domain::{FieldKind, FormField, FormState, FormSubmission};

use super::use_services;

/// `FormPort` over the component's form state
#[derive(Clone, Copy)]
struct SignalForm(Signal<FormState>);

impl FormPort for SignalForm {
    fn read_fields(&self) -> FormSubmission {
        self.0.read().snapshot()
    }

    fn reset(&self) {
        let mut form = self.0;
        form.write().reset();
    }
}

/// Internship Form - one input per schema field and a submit button
#[component]
pub fn InternshipForm() -> Element {
    let services = use_services();
    let schema = services.schema.clone();
    let form = use_signal(move || FormState::new(schema));

    let fields = form.read().schema().fields().to_vec();

    let onsubmit = move |evt: FormEvent| {
        submit_form(&evt, form, services.submit.clone());
    };

    rsx! {
        div {
            class: "internship-form max-w-2xl mx-auto p-6",

            h2 {
                class: "text-xl font-bold mb-4",
                "Post an Internship"
            }

            form {
                id: "internshipForm",
                class: "space-y-4",
                onsubmit: onsubmit,

                for field in fields {
                    FieldInput {
                        key: "{field.name}",
                        field: field.clone(),
                        form: form,
                    }
                }

                button {
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg text-white",
                    r#type: "submit",
                    "Post Internship"
                }
            }
        }
    }
}

/// Suppress the default navigation of `evt`, then submit `form` on its own task
fn submit_form<T: ?Sized + 'static>(
    evt: &Event<T>,
    form: Signal<FormState>,
    submit: Arc<SubmitInternship>,
) {
    evt.prevent_default();

    spawn(async move {
        submit.execute(&SignalForm(form)).await;
    });
}

#[component]
fn FieldInput(field: FormField, form: Signal<FormState>) -> Element {
    let value = form
        .read()
        .value(&field.name)
        .unwrap_or_default()
        .to_string();

    let name = field.name.clone();
    let oninput = move |e: FormEvent| {
        let mut form = form;
        if let Err(err) = form.write().set(&name, e.value()) {
            tracing::warn!(error = %err, "Ignoring input for undeclared field");
        };
    };

    let input_class = "w-full px-3 py-2 border rounded-lg";

    let control = match &field.kind {
        FieldKind::TextArea => rsx! {
            textarea {
                class: input_class,
                id: "{field.name}",
                name: "{field.name}",
                rows: "4",
                required: field.required,
                value: "{value}",
                oninput: oninput,
            }
        },
        FieldKind::Text => rsx! {
            input {
                class: input_class,
                id: "{field.name}",
                name: "{field.name}",
                r#type: "text",
                required: field.required,
                value: "{value}",
                oninput: oninput,
            }
        },
        FieldKind::Number { min, max, step } => rsx! {
            input {
                class: input_class,
                id: "{field.name}",
                name: "{field.name}",
                r#type: "number",
                min: min.map(|v| v.to_string()),
                max: max.map(|v| v.to_string()),
                step: step.map(|v| v.to_string()),
                required: field.required,
                value: "{value}",
                oninput: oninput,
            }
        },
    };

    rsx! {
        div {
            class: "form-group",
            label {
                class: "block text-sm font-medium mb-1",
                r#for: "{field.name}",
                "{field.label}"
            }
            {control}
        }
    }
}
