//! Dioxus UI.

use dioxus::prelude::*;
use std::sync::Arc;

use internhub_client::SubmitInternship;
use internhub_domain::FormSchema;

pub mod internship_form;

pub use internship_form::InternshipForm;

/// Services provided to the UI via Dioxus context by the composition root
/// (see `crates/web/src/main.rs`).
#[derive(Clone)]
pub struct Services {
    pub submit: Arc<SubmitInternship>,
    /// Schema the internship form renders
    pub schema: FormSchema,
}

impl Services {
    pub fn new(submit: SubmitInternship, schema: FormSchema) -> Self {
        Self {
            submit: Arc::new(submit),
            schema,
        }
    }
}

/// Hook to access the services from Dioxus context
pub fn use_services() -> Services {
    use_context::<Services>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        document::Title { "Post an Internship" }

        main {
            style: "min-height: 100vh;",
            InternshipForm {}
        }
    }
}
