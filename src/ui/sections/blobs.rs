use leptos::prelude::*;

/// A slowly drifting background shape
struct Blob {
    class: &'static str,
    gradient: &'static str,
    delay_s: u32,
}

const BLOBS: [Blob; 3] = [
    Blob {
        class: "organic-blob w-96 h-96 -top-48 -left-48",
        gradient: "linear-gradient(135deg, hsl(25, 95%, 45%) 0%, hsl(42, 88%, 55%) 100%)",
        delay_s: 0,
    },
    Blob {
        class: "organic-blob w-80 h-80 top-1/3 -right-40",
        gradient: "linear-gradient(225deg, hsl(35, 85%, 35%) 0%, hsl(25, 95%, 45%) 100%)",
        delay_s: 5,
    },
    Blob {
        class: "organic-blob w-72 h-72 -bottom-36 left-1/4",
        gradient: "linear-gradient(45deg, hsl(42, 88%, 55%) 0%, hsl(25, 95%, 45%) 100%)",
        delay_s: 10,
    },
];

impl Blob {
    fn style(&self) -> String {
        format!("background: {}; animation-delay: {}s", self.gradient, self.delay_s)
    }
}

/// Decorative background layer; hidden from assistive technology
#[component]
pub fn OrganicBlobs() -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {BLOBS
                .iter()
                .map(|blob| view! { <div class=blob.class style=blob.style()></div> })
                .collect_view()}
        </div>
    }
}
