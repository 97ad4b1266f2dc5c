//! Entrance animations in the DOM.
//!
//! [`Revealed`] writes a [`Reveal`]'s pose and timing onto an element as
//! data attributes and CSS custom properties. [`RevealScript`] then marks
//! elements `visible`: mount reveals right away, viewport reveals the first
//! time they intersect. Each element is unobserved after it settles, so
//! scrolling back never replays an entrance.
//!
//! The script belongs to the page that owns the revealed elements, so it runs
//! again whenever that page is mounted by the router.

use leptos::prelude::*;

use crate::core::motion::{EASING, Reveal};

/// Wrapper element that animates in according to `reveal`
#[component]
pub fn Revealed(
    reveal: Reveal,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class
            data-reveal=reveal.trigger.as_str()
            data-reveal-margin=reveal.margin_attr()
            style=reveal.style()
        >
            {children()}
        </div>
    }
}

/// Base styles for revealed elements
pub fn reveal_css() -> String {
    format!(
        r#"
[data-reveal] {{
    opacity: 0;
    transform: translate3d(var(--reveal-x, 0px), var(--reveal-y, 0px), 0) scale(var(--reveal-scale, 1));
    transition-property: opacity, transform;
    transition-timing-function: {easing};
    will-change: opacity, transform;
}}
[data-reveal].visible {{
    opacity: 1;
    transform: none;
}}
.feature-icon {{
    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1), background-color 0.2s;
}}
.feature-icon:hover {{
    transform: scale(var(--hover-scale, 1)) rotate(var(--hover-rotate, 0deg));
}}
@media (prefers-reduced-motion: reduce) {{
    [data-reveal] {{ opacity: 1; transform: none; transition: none; }}
    .feature-icon:hover {{ transform: none; }}
}}
"#,
        easing = EASING
    )
}

/// CSS for revealed elements, plus a no-script escape hatch
#[component]
pub fn RevealStyles() -> impl IntoView {
    view! {
        <style>{reveal_css()}</style>
        <noscript>
            <style>"[data-reveal] { opacity: 1; transform: none; }"</style>
        </noscript>
    }
}

/// Script for mount and viewport reveals using IntersectionObserver.
/// Elements that are already `visible` are skipped.
#[component]
pub fn RevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function settle(el) {
                    el.classList.add('visible');
                }

                function initReveals() {
                    var reduce = window.matchMedia &&
                        window.matchMedia('(prefers-reduced-motion: reduce)').matches;
                    var canObserve = 'IntersectionObserver' in window;
                    var observers = {};

                    function observerFor(margin) {
                        if (!observers[margin]) {
                            observers[margin] = new IntersectionObserver(function(entries, observer) {
                                entries.forEach(function(entry) {
                                    if (entry.isIntersecting) {
                                        settle(entry.target);
                                        observer.unobserve(entry.target);
                                    }
                                });
                            }, { rootMargin: margin });
                        }
                        return observers[margin];
                    }

                    document.querySelectorAll('[data-reveal]').forEach(function(el) {
                        if (el.classList.contains('visible')) {
                            return;
                        }
                        if (reduce || !canObserve || el.dataset.reveal === 'mount') {
                            requestAnimationFrame(function() { settle(el); });
                            return;
                        }
                        observerFor(el.dataset.revealMargin || '0px').observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveals);
                } else {
                    // Mounted by client-side navigation; wait for siblings to attach
                    requestAnimationFrame(initReveals);
                }
            })();
            "#
        </script>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::motion::{self, HeroStep};

    #[test]
    fn test_revealed_writes_timing() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <Revealed reveal=HeroStep::Price.reveal() class="pt-4">
                    <span>"x"</span>
                </Revealed>
            }
            .to_html()
        });

        assert!(html.contains(r#"data-reveal="mount""#));
        assert!(html.contains("transition-delay:500ms"));
        assert!(html.contains(r#"class="pt-4""#));
    }

    #[test]
    fn test_viewport_reveal_margin() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <Revealed reveal=motion::feature_card(1)>
                    <span>"x"</span>
                </Revealed>
            }
            .to_html()
        });

        assert!(html.contains(r#"data-reveal="view""#));
        assert!(html.contains(r#"data-reveal-margin="-50px""#));
        assert!(html.contains("transition-delay:100ms"));
    }

    #[test]
    fn test_reveal_css_uses_shared_easing() {
        assert!(reveal_css().contains("cubic-bezier(0.4, 0, 0.2, 1)"));
        assert!(reveal_css().contains("prefers-reduced-motion"));
    }
}
