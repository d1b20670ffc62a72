use crate::constants::*;
use crate::dom;
use crate::frame::RafLoop;
use folio_core::coin::{CoinStep, FlipCoin};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let (Some(wrapper), Some(coin_el)) = (
        document.get_element_by_id(COIN_WRAPPER_ID),
        document.get_element_by_id(COIN_ID),
    ) else {
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let coin = Rc::new(RefCell::new(FlipCoin::new()));

    let coin_scroll = coin.clone();
    dom::on(window.as_ref(), "scroll", move |_| {
        if let Some(visible) = coin_scroll.borrow_mut().on_scroll(dom::scroll_y()) {
            dom::set_class(&wrapper, COIN_VISIBLE_CLASS, visible);
        }
    })?;

    let target = coin_el.clone();
    dom::on(coin_el.as_ref(), "click", move |_| {
        if !coin.borrow_mut().click(dom::now_ms()) {
            return;
        }
        dom::set_class(&target, COIN_FLIPPING_CLASS, true);
        scroll_to_top();

        let coin = coin.clone();
        let target = target.clone();
        RafLoop::start(move |ts| {
            let mut c = coin.borrow_mut();
            for step in c.tick(ts) {
                match step {
                    CoinStep::Settle => {
                        dom::set_class(&target, COIN_FLIPPING_CLASS, false);
                        dom::set_class(&target, COIN_SETTLING_CLASS, true);
                    }
                    CoinStep::Rest => dom::set_class(&target, COIN_SETTLING_CLASS, false),
                }
            }
            !c.is_idle()
        })
        .detach();
    })?;
    Ok(())
}

fn scroll_to_top() {
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
