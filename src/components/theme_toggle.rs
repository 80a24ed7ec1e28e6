//! Theme toggle control.

use dioxus::prelude::*;

const SUN_SVG: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41"/></svg>"#;

const MOON_SVG: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/></svg>"#;

/// Marks a toggle whose clicks are handled by [`ThemeToggle`] itself.
/// The browser entry does not attach its own click handler to such a toggle.
pub const MANAGED_ATTRIBUTE: &str = "data-theme-managed";

/// Toggle button for pages rendered by a live Dioxus app (client-side or
/// hydrated). Clicks go to the installed theme controller, which also styles
/// the icons once the button is mounted.
///
/// Static server-rendered pages without hydration should ship the same
/// markup without [`MANAGED_ATTRIBUTE`]; the controller binds that at DOM-ready.
#[component]
pub fn ThemeToggle() -> Element {
    use_effect(refresh_icons);

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: "Toggle color theme",
            aria_label: "Toggle color theme",
            "data-theme-managed": "dioxus",
            onclick: move |_| toggle_installed(),
            span { class: "icon-sun", aria_hidden: "true", dangerous_inner_html: SUN_SVG }
            span { class: "icon-moon", aria_hidden: "true", dangerous_inner_html: MOON_SVG }
        }
    }
}

fn toggle_installed() {
    #[cfg(target_arch = "wasm32")]
    {
        match crate::web::installed() {
            Some(controller) => {
                if let Err(e) = controller.toggle_theme() {
                    tracing::error!("Failed to toggle theme: {}", e);
                }
            }
            None => tracing::warn!("Theme toggle clicked before the controller was installed"),
        }
    }
}

fn refresh_icons() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(controller) = crate::web::installed() {
            if let Err(e) = controller.on_dom_ready() {
                tracing::error!("Failed to refresh theme toggle: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        dioxus_ssr::render_element(rsx! { ThemeToggle {} })
    }

    #[test]
    fn renders_toggle_with_both_icons() {
        let html = render();
        assert!(html.contains(r#"class="theme-toggle""#), "{html}");
        assert!(html.contains(r#"class="icon-sun""#), "{html}");
        assert!(html.contains(r#"class="icon-moon""#), "{html}");
    }

    #[test]
    fn toggle_is_a_plain_button() {
        // type=button keeps it from submitting a surrounding form
        let html = render();
        assert!(html.contains(r#"type="button""#), "{html}");
        assert!(html.contains("aria-label"), "{html}");
    }

    #[test]
    fn toggle_is_marked_as_managed() {
        let html = render();
        assert!(
            html.contains(&format!(r#"{MANAGED_ATTRIBUTE}="dioxus""#)),
            "{html}"
        );
    }

    #[test]
    fn icons_carry_inline_svg() {
        let html = render();
        assert_eq!(html.matches("<svg").count(), 2, "{html}");
    }
}
