use crate::constants::*;
use crate::dom::{self, BrowserStore, StorageKind};
use folio_core::theme::{Theme, ThemePolicy, LIGHT_MODE_CLASS};
use wasm_bindgen::JsCast;
use web_sys as web;

fn policy_for(body: &web::HtmlElement) -> ThemePolicy {
    match body.get_attribute(THEME_POLICY_ATTR).as_deref().map(str::trim) {
        Some("force-dark") => ThemePolicy::ForceDark,
        _ => ThemePolicy::Persist,
    }
}

fn apply(body: &web::HtmlElement, theme: Theme) {
    dom::set_class(body, LIGHT_MODE_CLASS, theme.is_light());
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let policy = policy_for(&body);
    let mut store = BrowserStore::open(StorageKind::Local);
    let theme = policy.load(&mut store);
    apply(&body, theme);
    log::info!("[theme] {} ({:?})", theme.as_str(), policy);

    let Some(toggle) = dom::by_id::<web::HtmlInputElement>(document, THEME_TOGGLE_ID) else {
        return Ok(());
    };
    toggle.set_checked(theme.toggle_checked());
    dom::on(toggle.as_ref(), "change", move |ev| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let theme = policy.toggled(input.checked(), &mut store);
        if policy == ThemePolicy::ForceDark {
            input.set_checked(theme.toggle_checked());
        }
        apply(&body, theme);
    })?;
    Ok(())
}
