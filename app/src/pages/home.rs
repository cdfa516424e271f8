use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::sections::Section;

/// The whole portfolio: navigation, every section in page order, footer.
#[component]
pub fn Index() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar />
            {Section::ALL.into_iter().map(Section::render).collect_view()}
            <Footer />
        </div>
    }
}
