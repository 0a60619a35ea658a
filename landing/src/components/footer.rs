use crate::content::PRODUCT_NAME;
use leptos::prelude::*;

#[component]
pub fn Footer(copyright_year: Option<i32>) -> impl IntoView {
    let notice = match copyright_year {
        Some(year) => format!("© {} {}. All rights reserved.", year, PRODUCT_NAME),
        None => format!("© {}. All rights reserved.", PRODUCT_NAME),
    };

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{notice}</p>
            </div>
        </footer>
    }
}
