use crate::constants::*;
use crate::dom;
use crate::frame::RafLoop;
use crate::input;
use folio_core::particles::{FieldConfig, ParticleField};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::by_id::<web::HtmlCanvasElement>(document, PARTICLE_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{PARTICLE_CANVAS_ID}"))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let parent: web::HtmlElement = canvas
        .parent_element()
        .ok_or_else(|| anyhow::anyhow!("#{PARTICLE_CANVAS_ID} has no parent"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let field = Rc::new(RefCell::new(ParticleField::new(
        FieldConfig::default(),
        rand::random(),
    )?));
    fit(&canvas, &parent, &mut field.borrow_mut());

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    {
        let field = field.clone();
        let canvas = canvas.clone();
        let parent = parent.clone();
        dom::on(window.as_ref(), "resize", move |_| {
            fit(&canvas, &parent, &mut field.borrow_mut());
        })?;
    }
    {
        let field = field.clone();
        let canvas = canvas.clone();
        dom::on(parent.as_ref(), "mousemove", move |ev| {
            if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
                let client = Vec2::new(me.client_x() as f32, me.client_y() as f32);
                let local = input::client_to_local(client, dom::client_rect(&canvas));
                field.borrow_mut().set_pointer(Some(local));
            }
        })?;
    }
    {
        let field = field.clone();
        dom::on(parent.as_ref(), "mouseleave", move |_| {
            field.borrow_mut().set_pointer(None);
        })?;
    }

    let last_ts = Cell::new(None::<f64>);
    RafLoop::start(move |ts| {
        let dt = last_ts.replace(Some(ts)).map_or(0.0, |prev| ts - prev);
        let mut f = field.borrow_mut();
        draw(&ctx, &f);
        f.step(dt);
        true
    })
    .detach();

    log::info!("[particles] ready");
    Ok(())
}

// Canvas spans the viewport width and the parent's height; a new size
// means a fresh set of particles.
fn fit(canvas: &web::HtmlCanvasElement, parent: &web::HtmlElement, field: &mut ParticleField) {
    let width = dom::viewport_width().max(0.0) as u32;
    let height = parent.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    field.resize(width as f32, height as f32);
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let size = field.size();
    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);

    let particles = field.particles();
    ctx.set_line_width(1.0);
    for link in field.links() {
        let (a, b) = (particles[link.a].pos, particles[link.b].pos);
        ctx.begin_path();
        ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", link.alpha));
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }

    ctx.set_fill_style_str(PARTICLE_COLOR);
    for p in particles {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
        ctx.fill();
    }
}
